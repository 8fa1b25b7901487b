use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{ContentProvider, Serializer, Validate, YamlSerializer};

/// A single validated value persisted through a content provider.
/// Loaded lazily and cached; missing content yields `T::default()`.
pub struct YamlDocument<P, T, S = YamlSerializer>
where
    P: ContentProvider,
    T: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    S: Serializer<T>,
{
    provider: P,
    serializer: S,
    cached: Mutex<Option<T>>,
}

impl<P, T> YamlDocument<P, T, YamlSerializer>
where
    P: ContentProvider,
    T: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(provider: P) -> Self {
        Self::with_serializer(provider, YamlSerializer::new())
    }
}

impl<P, T, S> YamlDocument<P, T, S>
where
    P: ContentProvider,
    T: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    S: Serializer<T>,
{
    pub fn with_serializer(provider: P, serializer: S) -> Self {
        Self {
            provider,
            serializer,
            cached: Mutex::new(None),
        }
    }

    pub fn get(&self) -> Result<T, String> {
        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Document cache lock poisoned".to_string())?;

        if let Some(value) = cached.as_ref() {
            return Ok(value.clone());
        }

        let Some(content) = self.provider.read_content()? else {
            return Ok(T::default());
        };

        let value = self.serializer.deserialize(&content)?;
        value
            .validate()
            .map_err(|e| format!("Validation error: {}", e))?;

        *cached = Some(value.clone());
        Ok(value)
    }

    pub fn set(&self, value: &T) -> Result<(), String> {
        value
            .validate()
            .map_err(|e| format!("Validation error: {}", e))?;

        let content = self.serializer.serialize(value)?;
        self.provider.write_content(&content)?;

        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Document cache lock poisoned".to_string())?;
        *cached = Some(value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryContentProvider;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: u32,
    }

    impl Validate for Counter {
        fn validate(&self) -> Result<(), String> {
            if self.value > 100 {
                return Err("Counter too large".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_returns_default() {
        let document: YamlDocument<_, Counter> = YamlDocument::new(MemoryContentProvider::new());
        assert_eq!(document.get(), Ok(Counter::default()));
    }

    #[test]
    fn test_set_then_get() {
        let document = YamlDocument::new(MemoryContentProvider::new());
        document.set(&Counter { value: 7 }).unwrap();
        assert_eq!(document.get(), Ok(Counter { value: 7 }));
    }

    #[test]
    fn test_invalid_value_is_not_written() {
        let document = YamlDocument::new(MemoryContentProvider::new());
        assert!(document.set(&Counter { value: 500 }).is_err());
        assert_eq!(document.get(), Ok(Counter::default()));
    }

    #[test]
    fn test_invalid_stored_content_is_rejected() {
        let document: YamlDocument<_, Counter> =
            YamlDocument::new(MemoryContentProvider::with_content("value: 101\n"));
        assert!(document.get().is_err());
    }

    #[test]
    fn test_unparsable_content_is_rejected() {
        let document: YamlDocument<_, Counter> =
            YamlDocument::new(MemoryContentProvider::with_content("value: [not a number]\n"));
        assert!(document.get().is_err());
    }
}
