use chrono::Local;
use colored::*;

/// Named, coloured line logger shared by the finder binary and its loaders.
///
/// Every line is prefixed with the local time, the level and the upper-cased
/// component name. `debug` lines are only printed when the logger is verbose.
#[derive(Debug, Clone)]
pub struct Logger {
    pub name: String,
    pub info_color: Color,
    pub verbose: bool,
}

impl Logger {
    pub fn new(name: impl Into<String>, info_color: Color) -> Self {
        Self {
            name: name.into().to_uppercase(),
            info_color,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn timestamp() -> String {
        Local::now().format("%H:%M:%S%.3f").to_string()
    }

    fn prefix(&self, level: &str) -> String {
        format!("[{}][{}][{}]", Self::timestamp(), level, self.name)
    }

    pub fn debug(&self, msg: impl AsRef<str>) {
        if !self.verbose {
            return;
        }
        println!(
            "{} {} {}",
            self.prefix("DEBUG").dimmed(),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        println!(
            "{} {} {}",
            self.prefix("INFO").bold().color(self.info_color),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        println!(
            "{} {} {}",
            self.prefix("WARN").bold().yellow(),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        eprintln!(
            "{} {} {}",
            self.prefix("ERROR").bold().bright_red(),
            "→".dimmed(),
            msg.as_ref()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_upper_cased() {
        let logger = Logger::new("loader", Color::Cyan);
        assert_eq!(logger.name, "LOADER");
        assert!(!logger.verbose);
    }

    #[test]
    fn test_prefix_carries_level_and_name() {
        let logger = Logger::new("finder", Color::Green).verbose(true);
        let prefix = logger.prefix("INFO");
        assert!(prefix.ends_with("[INFO][FINDER]"));
        assert!(logger.verbose);
    }
}
