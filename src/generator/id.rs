//! Display ids for generated events.

use chrono::{DateTime, Utc};

/// Upper bound (exclusive) of the random disambiguator.
pub(crate) const DISAMBIGUATOR_SPACE: u32 = 0x1_0000;

/// `update_<unix-millis>_<4 hex digits>`.
///
/// Two events generated in the same millisecond collide only if they also draw
/// the same disambiguator.
pub(crate) fn compose_id(at: DateTime<Utc>, disambiguator: u32) -> String {
    format!("update_{}_{:04x}", at.timestamp_millis(), disambiguator)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_compose_id() {
        let at = Utc.timestamp_millis_opt(1_705_336_200_123).unwrap();
        assert_eq!(compose_id(at, 0xab), "update_1705336200123_00ab");
        assert_eq!(compose_id(at, 0xffff), "update_1705336200123_ffff");
    }
}
