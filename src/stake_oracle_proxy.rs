use multiversx_sc::proxy_imports::*;

/// Read-only view of an external stake ledger: `weightOf(address) -> BigUint`.
pub struct StakeOracleProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for StakeOracleProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = StakeOracleProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        StakeOracleProxyMethods { wrapped_tx: tx }
    }
}

pub struct StakeOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> StakeOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn weight_of<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        participant: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("weightOf")
            .argument(&participant)
            .original_result()
    }
}
