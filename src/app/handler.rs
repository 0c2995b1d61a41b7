use {
    crate::app::menu::{run_menu, NodeQueries},
    crate::constants::ABI_PATH,
    crate::libs::config::{load_env, Config},
    crate::libs::eth::{
        client::EthClient,
        spells::{get_balance, read_node, Balance, NodeData},
        QueryError,
    },
    crate::libs::lookup::{key_to_address, mask_secret, save_log_to_file, short_addr},
    crate::libs::writing::{cc, Console},
    crate::log,
    alloy::providers::Provider,
    anyhow::Result,
    netsepio::NETSEPIO_REGISTRY,
};

impl<P: Provider> NodeQueries for EthClient<P> {
    async fn account_balance(&self, address: &str) -> Result<Balance, QueryError> {
        get_balance(self, address).await
    }

    async fn node_data(&self, node_id: &str) -> Result<NodeData, QueryError> {
        read_node(self, ABI_PATH, node_id).await
    }
}

/// Startup: environment, connection probe, then the interactive loop.
/// Errors returned from here end the process with a non-zero status.
pub async fn init() -> Result<()> {
    load_env();
    let cfg = Config::from_env()?;

    log!("private key: {}", mask_secret(&cfg.private_key));
    match key_to_address(&cfg.private_key) {
        Some(addr) => log!(cc::LIGHT_CYAN, "wallet: {}", addr),
        None => crate::warn!("PRIVATE_KEY is not a hex secret; no wallet address derived"),
    }

    let cli = EthClient::connect(&cfg.rpc_url).await?;
    log!(cc::LIGHT_GREEN, "we have a connection (chain id {})", cli.chain_id);
    log!("registry: {}", short_addr(NETSEPIO_REGISTRY));
    save_log_to_file(&format!("[init] connected, chain id {}", cli.chain_id));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run_menu(&cli, &mut console).await;
    Ok(())
}
