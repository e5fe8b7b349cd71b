use k256::elliptic_curve::PrimeField;
use serde::{
    de::{Deserialize, Deserializer},
    ser::Serializer,
};

/// Serialize a PrimeField as a big-endian hex string (optionally `0x`-prefixed on input)
pub mod prime_field {
    use super::*;

    pub fn serialize<F, S>(field: &F, serializer: S) -> Result<S::Ok, S::Error>
    where
        F: PrimeField,
        S: Serializer,
    {
        let bytes = field.to_repr();
        serializer.serialize_str(&hex::encode(bytes.as_ref()))
    }

    pub fn deserialize<'de, F, D>(deserializer: D) -> Result<F, D::Error>
    where
        F: PrimeField,
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let digits = text.strip_prefix("0x").unwrap_or(&text);
        let bytes = hex::decode(digits).map_err(serde::de::Error::custom)?;
        let mut repr = F::Repr::default();
        if bytes.len() != repr.as_ref().len() {
            return Err(serde::de::Error::custom(format!(
                "invalid field element length: expected {} bytes, got {}",
                repr.as_ref().len(),
                bytes.len()
            )));
        }
        repr.as_mut().copy_from_slice(&bytes);
        Option::from(F::from_repr(repr))
            .ok_or_else(|| serde::de::Error::custom("field element out of range"))
    }
}
