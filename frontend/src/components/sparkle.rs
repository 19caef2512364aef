use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SparkleColor {
    #[default]
    Gold,
    White,
}

#[derive(Properties, PartialEq)]
pub struct SparkleProps {
    /// Seconds before the first twinkle.
    #[prop_or(1.0)]
    pub delay: f64,
    #[prop_or_default]
    pub color: SparkleColor,
}

#[function_component(CleanSparkle)]
pub fn clean_sparkle(props: &SparkleProps) -> Html {
    let fill_class = match props.color {
        SparkleColor::Gold => "sparkle-fill gold",
        SparkleColor::White => "sparkle-fill white",
    };

    html! {
        <svg
            class="clean-sparkle"
            width="30"
            height="30"
            viewBox="0 0 24 24"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            style={format!("animation-delay: {}s;", props.delay)}
        >
            <style>
                {r#"
                    .clean-sparkle {
                        position: absolute;
                        top: -1rem;
                        right: -1rem;
                        z-index: 20;
                        pointer-events: none;
                        transform: scale(0);
                        animation: twinkle 4.5s ease-in-out infinite;
                    }
                    .sparkle-fill.gold {
                        fill: #f59e0b;
                        filter: drop-shadow(0 0 8px rgba(245, 158, 11, 0.8));
                    }
                    .sparkle-fill.white {
                        fill: #fff;
                        filter: drop-shadow(0 0 8px rgba(255, 255, 255, 0.8));
                    }
                    @keyframes twinkle {
                        0% { transform: scale(0) rotate(0deg); opacity: 0; }
                        16% { transform: scale(1.5) rotate(90deg); opacity: 1; }
                        33% { transform: scale(0) rotate(180deg); opacity: 0; }
                        100% { transform: scale(0) rotate(180deg); opacity: 0; }
                    }
                "#}
            </style>
            <path class={fill_class} d="M12 0L14 9L23 12L14 15L12 24L10 15L1 12L10 9L12 0Z" />
        </svg>
    }
}
