use anyhow::Result;
use confessional_agent::Config;

pub async fn run_serve(bind: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(bind) = bind {
        config.bind_address = bind;
    }

    confessional_server::serve(&config).await
}
