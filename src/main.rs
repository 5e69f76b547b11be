use anyhow::Result;
use tracing::{error, info};
use translation_keys::config::Config;
use translation_keys::i18n::{Locale, TranslationKey, TranslationKeyOption, Translator};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_keys=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let translator = Translator::builtin(config.default_locale);
    info!("Process default locale: '{}'", translator.default_locale());

    let pt_br = Locale::new("pt-BR");

    let greeting = TranslationKey::from_option(TranslationKeyOption::BaseGreeting)?;
    println!("{}", translator.text(&greeting, None));
    println!("{}", translator.text(&greeting, Some(&pt_br)));

    let farewell = TranslationKey::from_option(TranslationKeyOption::FarewellMessage)?;
    println!("{}", translator.text(&farewell, Some(&pt_br)));

    for attempt in [TranslationKey::new("WelcomeMessage"), TranslationKey::from_discriminant(999)] {
        match attempt {
            Ok(key) => println!("{}", translator.text(&key, None)),
            Err(e) => {
                error!("{}", e);
                println!("One or more errors were detected!");
            }
        }
    }

    Ok(())
}
