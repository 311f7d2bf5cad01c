use applog_core::api::{OutputConfig, RecordFormatter, Zone};

pub fn stdout_is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Builds the record formatter for a sink, resolving `auto` color against
/// whether that sink is a terminal.
pub fn formatter_for(cfg: &OutputConfig, is_terminal: bool) -> RecordFormatter {
    let zone = if cfg.utc { Zone::utc() } else { Zone::Local };
    RecordFormatter::new(zone, cfg.color.enabled(is_terminal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use applog_core::api::ColorMode;

    #[test]
    fn auto_color_follows_terminal() {
        let cfg = OutputConfig::default();
        assert!(formatter_for(&cfg, true).color());
        assert!(!formatter_for(&cfg, false).color());
    }

    #[test]
    fn explicit_modes_ignore_terminal() {
        let always = OutputConfig {
            color: ColorMode::Always,
            utc: true,
        };
        let f = formatter_for(&always, false);
        assert!(f.color());
        assert_eq!(f.zone(), Zone::utc());

        let never = OutputConfig {
            color: ColorMode::Never,
            utc: false,
        };
        let f = formatter_for(&never, true);
        assert!(!f.color());
        assert_eq!(f.zone(), Zone::Local);
    }
}
