//! The [`EthClient`] owns the one node connection of the session and
//! exposes the two reads the menu needs.  Transport and JSON‑RPC
//! framing come from alloy's provider stack.
use alloy::eips::BlockId;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::{Provider, RootProvider};
use alloy::rpc::types::TransactionRequest;
use alloy::transports::TransportResult;
use anyhow::{Context, Result};
use url::Url;

#[derive(Clone, Debug)]
pub struct EthClient<P> {
    provider: P,
    /// Reported by the node during [`EthClient::from_provider`].
    pub chain_id: u64,
}

impl EthClient<RootProvider> {
    /// Parse `rpc_url` and make sure a node actually answers there.
    /// There is no retry; callers treat an error here as fatal.
    pub async fn connect(rpc_url: &str) -> Result<Self> {
        let url = Url::parse(rpc_url)
            .with_context(|| format!("Failed to parse ALCHEMY_URL: {rpc_url}"))?;
        let provider = RootProvider::new_http(url.clone());
        Self::from_provider(provider)
            .await
            .with_context(|| format!("Node at {url} is not reachable"))
    }
}

impl<P: Provider> EthClient<P> {
    /// Wrap an existing provider, probing it once with `eth_chainId`.
    pub async fn from_provider(provider: P) -> Result<Self> {
        let chain_id = provider
            .get_chain_id()
            .await
            .context("eth_chainId failed")?;
        Ok(Self { provider, chain_id })
    }

    /// `eth_getBalance(address, "latest")`, in wei.
    pub async fn balance(&self, address: Address) -> TransportResult<U256> {
        self.provider
            .get_balance(address)
            .block_id(BlockId::latest())
            .await
    }

    /// Read-only `eth_call` against the chain head.  No sender, gas,
    /// nonce or value is attached.
    pub async fn call(&self, to: Address, data: Bytes) -> TransportResult<Bytes> {
        let tx = TransactionRequest::default().with_to(to).with_input(data);
        self.provider.call(tx).block(BlockId::latest()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, U64};
    use alloy::providers::ProviderBuilder;
    use alloy::transports::mock::Asserter;

    fn mocked(asserter: &Asserter) -> impl Provider {
        ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(asserter.clone())
    }

    #[tokio::test]
    async fn probes_chain_id_on_connect() {
        let asserter = Asserter::new();
        asserter.push_success(&U64::from(3338));
        let client = EthClient::from_provider(mocked(&asserter)).await.unwrap();
        assert_eq!(client.chain_id, 3338);
    }

    #[tokio::test]
    async fn silent_node_fails_the_probe() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("upstream unavailable");
        assert!(EthClient::from_provider(mocked(&asserter)).await.is_err());
    }

    #[tokio::test]
    async fn unreachable_endpoint_fails_connect() {
        assert!(EthClient::connect("http://127.0.0.1:1").await.is_err());
    }

    #[tokio::test]
    async fn malformed_endpoint_fails_connect() {
        let err = EthClient::connect("not a url").await.unwrap_err();
        assert!(err.to_string().contains("ALCHEMY_URL"));
    }

    #[tokio::test]
    async fn reads_balance_and_call_results() {
        let asserter = Asserter::new();
        asserter.push_success(&U64::from(1));
        asserter.push_success(&U256::from(1_500_000_000_000_000_000u128));
        asserter.push_success(&Bytes::from_static(&[0xca, 0xfe]));

        let client = EthClient::from_provider(mocked(&asserter)).await.unwrap();
        let who = address!("0x00000000000000000000000000000000000000aa");

        let wei = client.balance(who).await.unwrap();
        assert_eq!(wei, U256::from(1_500_000_000_000_000_000u128));

        let out = client.call(who, Bytes::from_static(&[1, 2, 3, 4])).await.unwrap();
        assert_eq!(out.as_ref(), &[0xca, 0xfe]);
    }
}
