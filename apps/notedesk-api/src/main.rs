use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = notedesk_api::Args::parse();

	notedesk_api::run(args).await
}
