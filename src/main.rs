use releases::build_info;
use releases::util::config::ConfigLoader;
use releases::util::log::log_init_with_config;
use releases::util::logging::standards::events;

fn main() -> anyhow::Result<()> {
    let metadata = build_info::current();
    releases::hijack(env!("CARGO_PKG_VERSION"), metadata);

    let config = ConfigLoader::load()?;
    let _guard = log_init_with_config(&config.logging)?;

    tracing::info!(
        event = events::APP_START,
        version = env!("CARGO_PKG_VERSION"),
        commit = %metadata.commit,
        built = %metadata.build_date
    );

    println!("releases {}", metadata.summary(env!("CARGO_PKG_VERSION")));
    println!("Run with --buildinfo or --license for details.");
    Ok(())
}
