use anyhow::Result;

/// Persistent key-value store holding the user's configuration overrides.
pub trait OverrideStore {
    /// The raw override blob, or `None` if the user never stored one.
    fn load_override_config(&mut self) -> Result<Option<String>>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new(blob: &str) -> Self {
        MemoryStore {
            blob: Some(blob.to_owned()),
        }
    }
}

impl OverrideStore for MemoryStore {
    fn load_override_config(&mut self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }
}

#[cfg(feature = "espidf")]
pub use self::nvs::NvsStore;

#[cfg(feature = "espidf")]
mod nvs {
    use anyhow::Result;
    use esp_idf_svc::nvs::{EspDefaultNvsPartition, EspNvs, NvsDefault};
    use log::*;

    use super::OverrideStore;

    const MAX_BLOB_SIZE: usize = 512;

    pub struct NvsStore {
        nvs: EspNvs<NvsDefault>,
        key: &'static str,
    }

    impl NvsStore {
        pub fn new(partition: EspDefaultNvsPartition) -> Result<Self> {
            let (namespace, key) = crate::config::nvs_location();
            let nvs = EspNvs::new(partition, namespace, true)?;
            info!("Opened NVS namespace {}", namespace);
            Ok(NvsStore { nvs, key })
        }
    }

    impl OverrideStore for NvsStore {
        fn load_override_config(&mut self) -> Result<Option<String>> {
            let mut buf = [0u8; MAX_BLOB_SIZE];
            let blob = self.nvs.get_str(self.key, &mut buf)?;
            Ok(blob.map(str::to_owned))
        }
    }
}
