//! Boundary with the editor that hosts rendered blocks.
//!
//! The host owns registration and mounting; this crate only hands it a
//! processor that turns block source into markup.

use std::sync::Arc;

use tracing::debug;

use crate::constants::BLOCK_LANGUAGES;
use crate::converter::Converter;
use crate::error::ConvertResult;

/// Turns the raw text of one code block into markup.
pub type BlockProcessor = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// An editor that can render fenced code blocks through a processor.
pub trait BlockHost {
    fn register_block_processor(
        &mut self,
        language: &str,
        processor: BlockProcessor,
    ) -> ConvertResult<()>;
}

/// Registers `converter` for every identifier in [`BLOCK_LANGUAGES`].
///
/// All registrations share one converter. Stops at the first error the host
/// returns.
pub fn register<H>(host: &mut H, converter: Converter) -> ConvertResult<()>
where
    H: BlockHost + ?Sized,
{
    let converter = Arc::new(converter);
    for language in BLOCK_LANGUAGES {
        let converter = Arc::clone(&converter);
        let processor: BlockProcessor = Arc::new(move |source: &str| converter.convert(source));
        host.register_block_processor(language, processor)?;
        debug!("registered block processor for {:?}", language);
    }
    Ok(())
}

/// Whether a fence identifier is one this crate renders.
pub fn is_block_language(language: &str) -> bool {
    BLOCK_LANGUAGES.iter().any(|known| *known == language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarkupConfig;
    use crate::error::ConvertError;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockHost {
        processors: HashMap<String, BlockProcessor>,
        reject: Option<&'static str>,
    }

    impl MockHost {
        fn render(&self, language: &str, source: &str) -> Option<String> {
            self.processors.get(language).map(|p| p(source))
        }
    }

    impl BlockHost for MockHost {
        fn register_block_processor(
            &mut self,
            language: &str,
            processor: BlockProcessor,
        ) -> ConvertResult<()> {
            if self.reject == Some(language) {
                return Err(ConvertError::RegistrationFailed {
                    language: language.to_string(),
                    message: "already taken".to_string(),
                });
            }
            self.processors.insert(language.to_string(), processor);
            Ok(())
        }
    }

    #[test]
    fn registers_every_case_variant() {
        let mut host = MockHost::default();
        register(&mut host, Converter::default()).unwrap();

        assert_eq!(host.processors.len(), 3);
        for language in ["ansi", "ANSI", "Ansi"] {
            assert_eq!(
                host.render(language, "\x1b[1mx").as_deref(),
                Some(r#"<span class="ansi-bold">x</span>"#)
            );
        }
        assert!(host.render("aNSi", "x").is_none());
    }

    #[test]
    fn processors_use_given_config() {
        let mut host = MockHost::default();
        let converter = Converter::new(MarkupConfig::new().with_line_break("\n")).unwrap();
        register(&mut host, converter).unwrap();
        assert_eq!(host.render("ansi", "a\nb").as_deref(), Some("a\nb"));
    }

    #[test]
    fn stops_at_first_host_error() {
        let mut host = MockHost {
            reject: Some("ANSI"),
            ..MockHost::default()
        };
        let err = register(&mut host, Converter::default()).unwrap_err();

        assert_eq!(
            err,
            ConvertError::RegistrationFailed {
                language: "ANSI".into(),
                message: "already taken".into(),
            }
        );
        assert!(host.processors.contains_key("ansi"));
        assert!(!host.processors.contains_key("Ansi"));
    }

    #[test]
    fn works_through_trait_object() {
        let mut host = MockHost::default();
        let dyn_host: &mut dyn BlockHost = &mut host;
        register(dyn_host, Converter::default()).unwrap();
        assert_eq!(host.processors.len(), 3);
    }

    #[test]
    fn block_language_lookup() {
        assert!(is_block_language("ansi"));
        assert!(is_block_language("ANSI"));
        assert!(is_block_language("Ansi"));
        assert!(!is_block_language("aNsI"));
        assert!(!is_block_language("rust"));
    }
}
