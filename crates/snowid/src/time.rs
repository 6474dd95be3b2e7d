use crate::Snowflake;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Discord epoch: Thursday, January 1, 2015 00:00:00 UTC, in Unix
/// milliseconds.
pub const DISCORD_EPOCH: u64 = 1_420_070_400_000;

/// Twitter epoch: Thursday, November 4, 2010 01:42:54.657 UTC, in Unix
/// milliseconds.
pub const TWITTER_EPOCH: u64 = 1_288_834_974_657;

impl Snowflake {
    /// Combines the timestamp field with `epoch` and reads the sum as
    /// seconds since the Unix epoch.
    ///
    /// The stock epoch constants ([`DISCORD_EPOCH`], [`TWITTER_EPOCH`]) are
    /// millisecond counts while the sum is read as seconds, so the result
    /// sits far past the real creation instant. Existing consumers of this
    /// wire behavior compensate downstream; the arithmetic here stays
    /// bit-compatible with them.
    #[must_use]
    pub fn date_by_epoch(&self, epoch: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.timestamp() + epoch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_by_epoch_reads_the_sum_as_seconds() {
        let id = Snowflake::from_raw(1 << 22); // timestamp field == 1

        assert_eq!(id.date_by_epoch(0), UNIX_EPOCH + Duration::from_secs(1));
        assert_eq!(
            id.date_by_epoch(DISCORD_EPOCH),
            UNIX_EPOCH + Duration::from_secs(DISCORD_EPOCH + 1)
        );
    }

    #[test]
    fn payload_bits_do_not_move_the_date() {
        let bare = Snowflake::from_raw(7 << 22);
        let loaded = Snowflake::from_raw((7 << 22) | 0x3F_FFFF);

        assert_eq!(
            bare.date_by_epoch(TWITTER_EPOCH),
            loaded.date_by_epoch(TWITTER_EPOCH)
        );
    }
}
