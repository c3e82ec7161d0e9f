pub const ERR_NOT_INVESTOR: &str = "must be token holder";
pub const ERR_NOT_FOUND: &str = "proposal does not exist";
pub const ERR_ALREADY_FINALIZED: &str = "proposal already finalized";
pub const ERR_ALREADY_VOTED: &str = "already voted";
pub const ERR_QUORUM_NOT_MET: &str = "must reach quorum to finalize proposal";
pub const ERR_INSUFFICIENT_FUNDS: &str = "not enough funds in treasury";

pub const ERR_INVALID_AMOUNT: &str = "amount must be greater than zero";
pub const ERR_INVALID_QUORUM: &str = "quorum must be greater than zero";
pub const ERR_INVALID_STAKE_SOURCE: &str = "invalid stake source";
pub const ERR_WRONG_STAKE_TOKEN: &str = "wrong stake token";
pub const ERR_INVALID_UNSTAKE_AMOUNT: &str = "invalid unstake amount";
pub const ERR_EXTERNAL_STAKE: &str = "stake is held by an external oracle";
