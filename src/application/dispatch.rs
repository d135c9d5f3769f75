use crate::application::lookup::LookupUseCase;
use crate::application::replies;
use crate::domain::error::DomainError;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// One inbound chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// `/start` or `/help`
    Help,
    /// `/listar`
    List,
    /// `/ajuste [CODE]`
    Adjustment(Option<String>),
}

impl ChatCommand {
    /// Parse `/command[@bot] [args...]`. Returns `None` for anything that is
    /// not one of the known commands.
    pub fn parse(text: &str) -> Option<Self> {
        let mut words = text.split_whitespace();
        let head = words.next()?.strip_prefix('/')?;
        let name = head.split('@').next().unwrap_or(head);

        match name.to_lowercase().as_str() {
            "start" | "help" => Some(ChatCommand::Help),
            "listar" => Some(ChatCommand::List),
            "ajuste" => Some(ChatCommand::Adjustment(words.next().map(String::from))),
            _ => None,
        }
    }
}

/// Turns chat commands into reply texts.
pub struct DispatchUseCase {
    lookup: Arc<LookupUseCase>,
}

impl DispatchUseCase {
    pub fn new(lookup: Arc<LookupUseCase>) -> Self {
        Self { lookup }
    }

    /// Replies for one inbound message; empty for unknown commands.
    pub async fn handle(&self, text: &str) -> Vec<String> {
        let Some(command) = ChatCommand::parse(text) else {
            debug!(text, "ignoring unknown command");
            return vec![];
        };

        match command {
            ChatCommand::Help => vec![replies::help_text()],
            ChatCommand::List => match self.lookup.list_names().await {
                Ok(names) => vec![replies::names_reply(&names)],
                Err(e) => vec![report(&e)],
            },
            ChatCommand::Adjustment(None) => vec![replies::usage_text()],
            ChatCommand::Adjustment(Some(code)) => match self.lookup.lookup(&code).await {
                Ok(commodities) => commodities.iter().map(replies::commodity_reply).collect(),
                Err(e) => vec![report(&e)],
            },
        }
    }
}

fn report(err: &DomainError) -> String {
    match err {
        e if e.is_expected() => debug!(error = %e, "lookup without result"),
        DomainError::Parse(e) => error!(error = %e, "settlement table layout changed"),
        e => warn!(error = %e, "command failed"),
    }
    replies::error_reply(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ChatCommand::parse("/start"), Some(ChatCommand::Help));
        assert_eq!(ChatCommand::parse("/help"), Some(ChatCommand::Help));
        assert_eq!(ChatCommand::parse(" /listar "), Some(ChatCommand::List));
        assert_eq!(
            ChatCommand::parse("/ajuste doln20 extra"),
            Some(ChatCommand::Adjustment(Some("doln20".into())))
        );
        assert_eq!(
            ChatCommand::parse("/ajuste"),
            Some(ChatCommand::Adjustment(None))
        );
    }

    #[test]
    fn test_parse_strips_bot_mention() {
        assert_eq!(
            ChatCommand::parse("/Ajuste@ajustes_bot INDQ20"),
            Some(ChatCommand::Adjustment(Some("INDQ20".into())))
        );
    }

    #[test]
    fn test_parse_rejects_other_text() {
        assert_eq!(ChatCommand::parse(""), None);
        assert_eq!(ChatCommand::parse("listar"), None);
        assert_eq!(ChatCommand::parse("/comprar DOLN20"), None);
    }
}
