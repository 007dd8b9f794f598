use super::Error;
use std::fmt;
use std::str::FromStr;

pub const SHA1_HASH_SIZE: usize = 20;

/// Raw 20-byte object name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ObjectHash([u8; SHA1_HASH_SIZE]);

impl ObjectHash {
    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for ObjectHash {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(bytes.try_into()?))
    }
}

impl From<[u8; SHA1_HASH_SIZE]> for ObjectHash {
    fn from(value: [u8; SHA1_HASH_SIZE]) -> Self {
        Self(value)
    }
}

impl FromStr for ObjectHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != SHA1_HASH_SIZE * 2 {
            return Err(Error::InvalidHash(format!(
                "{s:?} must be 40-characters long"
            )));
        }

        let mut buf = [0u8; SHA1_HASH_SIZE];
        hex::decode_to_slice(s, &mut buf)
            .map_err(|err| Error::InvalidHash(format!("{s:?} is not hex. {err}")))?;
        Ok(Self(buf))
    }
}

impl fmt::Display for ObjectHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}
