use crate::evolution::DISCORD_MESSAGE_LIMIT;
use anyhow::{anyhow, bail, Result};
use serenity::all::{ChannelId, GuildId};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

const CONFIG_PATH_REL_HOME: &str = ".config/brobot/config.toml";

/// Discord's cap on messages fetched per history request.
const MAX_FETCH_PAGE_SIZE: u8 = 100;

/// Bot configuration
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Config {
    pub general: General,
    pub evolution_game: EvolutionGame,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct General {
    pub discord_token: String,
    pub bot_owners: Vec<String>,
    pub command_prefix: String,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct EvolutionGame {
    /// Server the evolution game commands are restricted to.  Any server if unset.
    #[serde(default)]
    pub guild_id: Option<u64>,
    /// Channel where creatures are posted
    pub evolutions_channel_id: u64,
    #[serde(default = "default_message_char_limit")]
    pub message_char_limit: usize,
    #[serde(default = "default_fetch_page_size")]
    pub fetch_page_size: u8,
}

fn default_message_char_limit() -> usize {
    DISCORD_MESSAGE_LIMIT
}

fn default_fetch_page_size() -> u8 {
    MAX_FETCH_PAGE_SIZE
}

impl EvolutionGame {
    /// Discord IDs are never 0, and serenity panics when handed one.
    fn validate(&self) -> Result<()> {
        if self.guild_id == Some(0) {
            bail!("evolution_game.guild_id must not be 0");
        }
        if self.evolutions_channel_id == 0 {
            bail!("evolution_game.evolutions_channel_id must not be 0");
        }
        Ok(())
    }

    pub fn guild_id(&self) -> Option<GuildId> {
        self.guild_id.map(GuildId::new)
    }

    pub fn evolutions_channel_id(&self) -> ChannelId {
        ChannelId::new(self.evolutions_channel_id)
    }

    /// Page size actually requested from Discord
    pub fn fetch_page_size(&self) -> u8 {
        self.fetch_page_size.clamp(1, MAX_FETCH_PAGE_SIZE)
    }

    /// Discord rejects anything longer, whatever the configuration says
    pub fn message_char_limit(&self) -> usize {
        self.message_char_limit.clamp(1, DISCORD_MESSAGE_LIMIT)
    }
}

impl Config {
    fn config_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|p| p.join(CONFIG_PATH_REL_HOME))
            .ok_or(anyhow!("Could not find home directory"))
    }

    pub async fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut file = tokio::fs::File::open(&path).await.map_err(|e| {
            anyhow!(
                "Could not open configuration at `{}`: {}",
                path.to_string_lossy(),
                e
            )
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).await.map_err(|e| {
            anyhow!(
                "Could not read configuration at `{}`: {}",
                path.to_string_lossy(),
                e
            )
        })?;

        Self::parse(&contents).map_err(|e| {
            anyhow!(
                "Could not parse configuration at `{}`: {}",
                path.to_string_lossy(),
                e
            )
        })
    }

    /// Only validated configurations are handed out; `reload` goes through here too.
    fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.evolution_game.validate()?;
        Ok(config)
    }

    pub async fn reload(&mut self) -> Result<()> {
        let new = Self::load().await?;
        *self = new;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = r#"
        [general]
        discord_token = "token"
        bot_owners = ["owner"]
        command_prefix = ";"

        [evolution_game]
        evolutions_channel_id = 456
    "#;

    #[test]
    fn optional_settings_have_defaults() {
        let cfg = Config::parse(MINIMAL).unwrap();

        assert_eq!(cfg.general.command_prefix, ";");
        assert_eq!(cfg.evolution_game.guild_id, None);
        assert_eq!(cfg.evolution_game.evolutions_channel_id, 456);
        assert_eq!(cfg.evolution_game.message_char_limit(), 2000);
        assert_eq!(cfg.evolution_game.fetch_page_size(), 100);
    }

    #[test]
    fn limits_are_clamped_to_what_discord_accepts() {
        let contents = format!(
            "{}\nguild_id = 123\nmessage_char_limit = 5000\nfetch_page_size = 250\n",
            MINIMAL
        );
        let cfg = Config::parse(&contents).unwrap();

        assert_eq!(cfg.evolution_game.guild_id, Some(123));
        assert_eq!(cfg.evolution_game.message_char_limit(), 2000);
        assert_eq!(cfg.evolution_game.fetch_page_size(), 100);
    }

    #[test]
    fn zero_ids_are_rejected() {
        let zero_channel = MINIMAL.replace("evolutions_channel_id = 456", "evolutions_channel_id = 0");
        let err = Config::parse(&zero_channel).err().unwrap();
        assert!(err.to_string().contains("evolutions_channel_id"));

        let zero_guild = format!("{}\nguild_id = 0\n", MINIMAL);
        let err = Config::parse(&zero_guild).err().unwrap();
        assert!(err.to_string().contains("guild_id"));
    }

    #[test]
    fn ids_are_handed_out_typed() {
        let cfg = Config::parse(&format!("{}\nguild_id = 123\n", MINIMAL)).unwrap();

        assert_eq!(cfg.evolution_game.guild_id(), Some(GuildId::new(123)));
        assert_eq!(cfg.evolution_game.evolutions_channel_id(), ChannelId::new(456));
    }

    #[test]
    fn missing_section_is_an_error() {
        let contents = "[general]\ndiscord_token = \"t\"\nbot_owners = []\ncommand_prefix = \";\"\n";
        assert!(Config::parse(contents).is_err());
    }
}
