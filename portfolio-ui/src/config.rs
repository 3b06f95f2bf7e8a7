use portfolio_core::PresentationConfig;
use serde::Deserialize;

/// Cấu hình từng phần do JS truyền vào khi mount; trường thiếu giữ mặc định.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct JsPresentationConfig {
    #[serde(default, alias = "revealFlipMs")]
    reveal_flip_ms: Option<u32>,
    #[serde(default, alias = "logSummary")]
    log_summary: Option<bool>,
}

impl From<JsPresentationConfig> for PresentationConfig {
    fn from(cfg: JsPresentationConfig) -> Self {
        let mut base = PresentationConfig::default();
        if let Some(ms) = cfg.reveal_flip_ms {
            base.reveal_flip_ms = ms;
        }
        if let Some(log_summary) = cfg.log_summary {
            base.log_summary = log_summary;
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merged(input: &str) -> PresentationConfig {
        let cfg: JsPresentationConfig = serde_json::from_str(input).expect("JSON hợp lệ");
        PresentationConfig::from(cfg)
    }

    #[test]
    fn empty_object_keeps_defaults() {
        assert_eq!(merged("{}"), PresentationConfig::default());
    }

    #[test]
    fn partial_override_accepts_both_spellings() {
        let cfg = merged(r#"{"revealFlipMs": 800}"#);
        assert_eq!(cfg.reveal_flip_ms, 800);
        assert!(cfg.log_summary);

        let cfg = merged(r#"{"log_summary": false}"#);
        assert_eq!(cfg.reveal_flip_ms, 2200);
        assert!(!cfg.log_summary);
    }
}
