use std::fmt;

use serde::{Deserialize, Serialize};

const WEI_PER_GWEI: u128 = 1_000_000_000;

/// Per-iteration airdrop, in gwei, for each account the work step will use.
const SPAM_GWEI_PER_TX: u128 = 1_000_000;

/// Stand-alone airdrop, in gwei, per transaction an account is expected to send.
const AIRDROP_GWEI_PER_TX: u128 = 100_000;

/// Blob transactions cost considerably more than basic ones.
const BLOB_MULTIPLIER: u128 = 100;

/// An amount of native currency in wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Wei(pub u128);

impl Wei {
    pub fn from_gwei(gwei: u128) -> Self {
        Self(gwei.saturating_mul(WEI_PER_GWEI))
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which flavour of transactions the work step sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpamKind {
    #[default]
    Basic,
    Blobs,
}

impl fmt::Display for SpamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpamKind::Basic => write!(f, "basic"),
            SpamKind::Blobs => write!(f, "blobs"),
        }
    }
}

/// Computes how much to provision before each iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundingPolicy {
    pub tx_per_account: u64,
    pub kind: SpamKind,
}

impl FundingPolicy {
    pub fn new(tx_per_account: u64, kind: SpamKind) -> Self {
        Self {
            tx_per_account,
            kind,
        }
    }

    /// Amount to airdrop before iteration `iteration` (1-based).
    ///
    /// `(1 + tx_per_account) * 1_000_000 gwei`, times 100 for blobs. The
    /// amount does not currently vary between iterations.
    pub fn amount_for(&self, _iteration: u64) -> Wei {
        let txs = u128::from(self.tx_per_account) + 1;
        let gwei = txs.saturating_mul(SPAM_GWEI_PER_TX);
        let gwei = match self.kind {
            SpamKind::Basic => gwei,
            SpamKind::Blobs => gwei.saturating_mul(BLOB_MULTIPLIER),
        };
        Wei::from_gwei(gwei)
    }

    /// Amount used by the one-off `airdrop` command.
    pub fn airdrop_amount(&self) -> Wei {
        Wei::from_gwei(u128::from(self.tx_per_account).saturating_mul(AIRDROP_GWEI_PER_TX))
    }
}
