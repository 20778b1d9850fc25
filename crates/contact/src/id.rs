use std::sync::{Arc, Mutex};

use mailroom_shared::{Error, Result, bail};
use ulid::{Generator, Ulid};

/// Hands out ULIDs that strictly increase within the process, so records
/// created in the same millisecond keep their creation order.
#[derive(Clone)]
pub struct IdGenerator(Arc<Mutex<Generator>>);

impl Default for IdGenerator {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(Generator::new())))
    }
}

impl IdGenerator {
    pub fn generate(&self) -> Result<String> {
        let Ok(mut generator) = self.0.lock() else {
            bail!("id generator lock poisoned");
        };

        match generator.generate() {
            Ok(id) => Ok(id.to_string()),
            Err(e) => bail!("failed to generate id: {}", e),
        }
    }
}

/// Parses a caller-supplied identifier into its canonical form.
pub fn parse_id(id: &str) -> Result<String> {
    Ulid::from_string(id)
        .map(|id| id.to_string())
        .map_err(|_| Error::InvalidId(id.to_owned()))
}
