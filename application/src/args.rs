//! [`Args`] definitions.

use clap::Parser;

/// Server of the payroll record-keeping system.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

impl Args {
    /// Parses the command line arguments of the running process.
    ///
    /// # Errors
    ///
    /// If the arguments don't match the expected ones.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;

    use super::Args;

    #[test]
    fn defaults_to_local_config() {
        let args = Args::try_parse_from(["payroll"]).unwrap();

        assert_eq!(args.config, "config.toml");
    }

    #[test]
    fn accepts_config_path() {
        let args =
            Args::try_parse_from(["payroll", "--config", "/etc/payroll.toml"])
                .unwrap();

        assert_eq!(args.config, "/etc/payroll.toml");
    }
}
