mod helper;
mod render;
mod run;
mod setting;

use crate::setting::Setting;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    helper::init_tracing_subscriber();

    let setting = Setting::try_new()?;

    let mut stdout = std::io::stdout();
    run::run(&setting, &mut stdout).await?;

    Ok(())
}
