use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct GateConfig {
    /// Composite score below this value fails the gate.
    #[arg(long, default_value_t = 50.0)]
    pub threshold: f64,

    /// File extension (without the dot) of documents to score.
    #[arg(long, default_value = "md")]
    pub extension: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            extension: "md".to_string(),
        }
    }
}
