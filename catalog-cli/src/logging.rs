use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Уровень логов: `-v` поднимает настроенный уровень на ступень за каждый флаг.
///
/// Нераспознанный уровень (например, директива `catalog_core=debug`)
/// возвращается как есть, если флагов нет.
pub fn effective_filter(configured: &str, verbose: u8) -> String {
    let configured = configured.trim();
    if verbose == 0 {
        return configured.to_string();
    }

    let base = LEVELS
        .iter()
        .position(|level| level.eq_ignore_ascii_case(configured))
        .unwrap_or(1);
    let index = (base + usize::from(verbose)).min(LEVELS.len() - 1);
    LEVELS[index].to_string()
}

/// Логи идут в stderr, чтобы не смешиваться с карточками в stdout.
pub fn init_logging(configured: &str, verbose: u8) -> Result<()> {
    let directive = effective_filter(configured, verbose);
    let filter = if verbose > 0 {
        EnvFilter::try_new(&directive)
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&directive))
    }
    .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_filter_keeps_configured_without_flags() {
        assert_eq!(effective_filter(" catalog_core=debug ", 0), "catalog_core=debug");
    }

    #[test]
    fn effective_filter_raises_level_per_flag() {
        assert_eq!(effective_filter("warn", 1), "info");
        assert_eq!(effective_filter("WARN", 2), "debug");
    }

    #[test]
    fn effective_filter_stops_at_trace() {
        assert_eq!(effective_filter("info", 9), "trace");
    }

    #[test]
    fn effective_filter_treats_directives_as_warn_when_raised() {
        assert_eq!(effective_filter("catalog_core=debug", 1), "info");
    }
}
