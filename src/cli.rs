// cli.rs - Command-line interface configuration
use crate::scenes::SceneKind;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "bedroom-scene")]
#[command(about = "Static bedroom scene viewer", long_about = None)]
pub struct Cli {
    /// Which scene to assemble at startup
    #[arg(long = "scene", value_enum, default_value = "simple")]
    pub scene: SceneKind,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
