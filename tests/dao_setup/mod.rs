#![allow(dead_code, deprecated)]

use multiversx_sc::types::{Address, BigUint};
use multiversx_sc_scenario::{
    managed_address, managed_buffer, managed_token_id, num_bigint, rust_biguint,
    whitebox_legacy::*, DebugApi,
};

use stake_dao::access::AccessModule;
use stake_dao::treasury::TreasuryModule;
use stake_dao::types::StakeSource;
use stake_dao::StakeDao;

pub const WASM_PATH: &str = "output/stake-dao.wasm";
pub const STAKE_TOKEN: &[u8] = b"STAKE-123456";

/// 18 decimals, for both EGLD and the stake token.
const ONE: u64 = 1_000_000_000_000_000_000;

pub const ERR_NOT_INVESTOR: &str = "must be token holder";
pub const ERR_NOT_FOUND: &str = "proposal does not exist";
pub const ERR_ALREADY_FINALIZED: &str = "proposal already finalized";
pub const ERR_ALREADY_VOTED: &str = "already voted";
pub const ERR_QUORUM_NOT_MET: &str = "must reach quorum to finalize proposal";
pub const ERR_INSUFFICIENT_FUNDS: &str = "not enough funds in treasury";
pub const ERR_INVALID_AMOUNT: &str = "amount must be greater than zero";
pub const ERR_WRONG_STAKE_TOKEN: &str = "wrong stake token";
pub const ERR_INVALID_UNSTAKE_AMOUNT: &str = "invalid unstake amount";

pub fn tokens(amount: u64) -> num_bigint::BigUint {
    rust_biguint!(amount) * ONE
}

/// 500,000.000000000000000001 stake: three holders of 200,000 pass, two do not.
pub fn default_quorum() -> num_bigint::BigUint {
    tokens(500_000) + 1u32
}

pub fn to_managed(value: &num_bigint::BigUint) -> BigUint<DebugApi> {
    BigUint::from_bytes_be(&value.to_bytes_be())
}

pub struct DaoSetup<DaoObjBuilder>
where
    DaoObjBuilder: 'static + Copy + Fn() -> stake_dao::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub owner: Address,
    pub funder: Address,
    pub investors: Vec<Address>,
    pub recipient: Address,
    pub user: Address,
    pub dao_wrapper: ContractObjWrapper<stake_dao::ContractObj<DebugApi>, DaoObjBuilder>,
}

/// Five investors with 200,000 stake each locked in the contract, a funded
/// treasury of 100 EGLD and a recipient starting at 10,000 EGLD.
pub fn setup_dao<DaoObjBuilder>(dao_builder: DaoObjBuilder) -> DaoSetup<DaoObjBuilder>
where
    DaoObjBuilder: 'static + Copy + Fn() -> stake_dao::ContractObj<DebugApi>,
{
    let rust_zero = rust_biguint!(0);
    let mut b_mock = BlockchainStateWrapper::new();

    let owner = b_mock.create_user_account(&rust_zero);
    let funder = b_mock.create_user_account(&tokens(1_000));
    let recipient = b_mock.create_user_account(&tokens(10_000));
    let user = b_mock.create_user_account(&rust_zero);

    let mut investors = Vec::new();
    for _ in 0..5 {
        let investor = b_mock.create_user_account(&rust_zero);
        b_mock.set_esdt_balance(&investor, STAKE_TOKEN, &tokens(200_000));
        investors.push(investor);
    }

    let dao_wrapper =
        b_mock.create_sc_account(&rust_zero, Some(&owner), dao_builder, WASM_PATH);

    b_mock
        .execute_tx(&owner, &dao_wrapper, &rust_zero, |sc| {
            sc.init(
                to_managed(&default_quorum()),
                StakeSource::LockedToken(managed_token_id!(STAKE_TOKEN)),
            );
        })
        .assert_ok();

    let mut setup = DaoSetup {
        b_mock,
        owner,
        funder,
        investors,
        recipient,
        user,
        dao_wrapper,
    };

    for index in 0..setup.investors.len() {
        let investor = setup.investor(index);
        setup.stake(&investor, &tokens(200_000)).assert_ok();
    }

    let funder = setup.funder.clone();
    setup.deposit(&funder, &tokens(100)).assert_ok();

    setup
}

impl<DaoObjBuilder> DaoSetup<DaoObjBuilder>
where
    DaoObjBuilder: 'static + Copy + Fn() -> stake_dao::ContractObj<DebugApi>,
{
    pub fn investor(&self, index: usize) -> Address {
        self.investors[index].clone()
    }

    pub fn deposit(&mut self, funder: &Address, amount: &num_bigint::BigUint) -> TxResult {
        self.b_mock
            .execute_tx(funder, &self.dao_wrapper, amount, |sc| {
                sc.deposit();
            })
    }

    pub fn stake(&mut self, caller: &Address, amount: &num_bigint::BigUint) -> TxResult {
        self.b_mock.execute_esdt_transfer(
            caller,
            &self.dao_wrapper,
            STAKE_TOKEN,
            0,
            amount,
            |sc| {
                sc.stake();
            },
        )
    }

    pub fn unstake(&mut self, caller: &Address, amount: &num_bigint::BigUint) -> TxResult {
        let amount = amount.clone();
        self.b_mock
            .execute_tx(caller, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.unstake(to_managed(&amount));
            })
    }

    /// Proposes paying `amount` EGLD to the default recipient.
    pub fn create_proposal(&mut self, caller: &Address, amount: u64) -> TxResult {
        let recipient = self.recipient.clone();
        self.b_mock
            .execute_tx(caller, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.create_proposal(
                    managed_buffer!(b"Proposal 1"),
                    to_managed(&tokens(amount)),
                    managed_address!(&recipient),
                );
            })
    }

    pub fn vote(&mut self, caller: &Address, proposal_id: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.vote(proposal_id);
            })
    }

    pub fn finalize(&mut self, caller: &Address, proposal_id: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.dao_wrapper, &rust_biguint!(0), |sc| {
                sc.finalize_proposal(proposal_id);
            })
    }

    /// Votes from the first `voter_count` investors.
    pub fn vote_from_first(&mut self, voter_count: usize, proposal_id: u64) {
        for index in 0..voter_count {
            let investor = self.investor(index);
            self.vote(&investor, proposal_id).assert_ok();
        }
    }

    pub fn check_treasury(&mut self, expected: &num_bigint::BigUint) {
        let expected = expected.clone();
        self.b_mock
            .execute_query(&self.dao_wrapper, |sc| {
                assert_eq!(sc.get_treasury_balance(), to_managed(&expected));
            })
            .assert_ok();
    }
}

/// Topics of every log entry whose identifier is `identifier`.
pub fn events_named(result: &TxResult, identifier: &[u8]) -> Vec<Vec<Vec<u8>>> {
    result
        .result_logs
        .iter()
        .filter(|log| log.topics.first().map(|topic| topic.as_slice()) == Some(identifier))
        .map(|log| log.topics.clone())
        .collect()
}

/// Topics of the single log entry named `identifier`.
pub fn single_event(result: &TxResult, identifier: &[u8]) -> Vec<Vec<u8>> {
    let mut events = events_named(result, identifier);
    assert_eq!(events.len(), 1, "expected exactly one {:?} event", identifier);
    events.remove(0)
}

pub fn address_topic(address: &Address) -> Vec<u8> {
    address.as_bytes().to_vec()
}
