//! UI-agnostic intents. Input adapters (keyboard, touch, console, the
//! simulator) translate their events into [`RunnerIntent`]s and hand them to
//! [`RunnerGame::apply`].

use super::game::{DamageOutcome, RunnerGame};
use crate::effects::EffectKind;
use crate::progression::LetterOutcome;
use crate::redemption::RedeemResult;

#[derive(Debug, Clone, PartialEq)]
pub enum RunnerIntent {
    StartGame,
    RestartGame,
    PauseGame,
    ResumeGame,
    QuitToMenu,
    TakeDamage,
    CollectGem(u64),
    CollectLetter(usize),
    SetDistance(f64),
    BuyItem { kind: EffectKind, cost: u64 },
    UseItem(EffectKind),
    OpenShop,
    CloseShop,
    OpenRecharge,
    CloseRecharge,
    RedeemKey(String),
}

/// What applying an intent did.
#[derive(Debug, Clone, PartialEq)]
pub enum IntentOutcome {
    /// A lifecycle or screen change; `changed` is false if the current
    /// status did not allow it.
    Transition { changed: bool },
    Damage(DamageOutcome),
    Gem { points: u64 },
    Letter(LetterOutcome),
    Purchase { success: bool },
    ItemUsed { success: bool },
    Redeemed(RedeemResult),
    DistanceSet,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIntentError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing argument for {0}")]
    MissingArgument(&'static str),
    #[error("invalid argument for {command}: {value}")]
    InvalidArgument { command: &'static str, value: String },
}

fn parse_arg<T: std::str::FromStr>(
    command: &'static str,
    value: Option<&str>,
) -> Result<T, ParseIntentError> {
    let value = value.ok_or(ParseIntentError::MissingArgument(command))?;
    value.parse().map_err(|_| ParseIntentError::InvalidArgument {
        command,
        value: value.to_string(),
    })
}

fn parse_kind(command: &'static str, value: Option<&str>) -> Result<EffectKind, ParseIntentError> {
    let value = value.ok_or(ParseIntentError::MissingArgument(command))?;
    EffectKind::from_name(value).ok_or_else(|| ParseIntentError::InvalidArgument {
        command,
        value: value.to_string(),
    })
}

impl RunnerIntent {
    /// Parse a console command such as `gem 100`, `buy shield` or
    /// `buy rocket 800`. Without a price, `buy` uses the shop price.
    pub fn parse(line: &str) -> Result<Self, ParseIntentError> {
        let mut parts = line.split_whitespace();
        let command = parts.next().ok_or(ParseIntentError::Empty)?;

        let intent = match command.to_ascii_lowercase().as_str() {
            "start" => Self::StartGame,
            "restart" => Self::RestartGame,
            "pause" => Self::PauseGame,
            "resume" => Self::ResumeGame,
            "quit" | "menu" => Self::QuitToMenu,
            "hit" | "damage" => Self::TakeDamage,
            "gem" => Self::CollectGem(parse_arg("gem", parts.next())?),
            "letter" => Self::CollectLetter(parse_arg("letter", parts.next())?),
            "distance" => Self::SetDistance(parse_arg("distance", parts.next())?),
            "buy" => {
                let kind = parse_kind("buy", parts.next())?;
                let cost = match parts.next() {
                    Some(cost) => parse_arg("buy", Some(cost))?,
                    None => crate::inventory::ShopItem::for_kind(kind).cost,
                };
                Self::BuyItem { kind, cost }
            }
            "use" => Self::UseItem(parse_kind("use", parts.next())?),
            "shop" => Self::OpenShop,
            "close-shop" => Self::CloseShop,
            "recharge" => Self::OpenRecharge,
            "close-recharge" => Self::CloseRecharge,
            "redeem" => {
                // Codes are case-sensitive; take the raw remainder.
                let code = line.trim_start()[command.len()..].trim();
                if code.is_empty() {
                    return Err(ParseIntentError::MissingArgument("redeem"));
                }
                Self::RedeemKey(code.to_string())
            }
            other => return Err(ParseIntentError::UnknownCommand(other.to_string())),
        };
        Ok(intent)
    }
}

impl RunnerGame {
    /// Dispatch an intent to the matching operation.
    pub fn apply(&mut self, intent: RunnerIntent) -> IntentOutcome {
        match intent {
            RunnerIntent::StartGame => {
                self.start_game();
                IntentOutcome::Transition { changed: true }
            }
            RunnerIntent::RestartGame => {
                self.restart_game();
                IntentOutcome::Transition { changed: true }
            }
            RunnerIntent::PauseGame => IntentOutcome::Transition {
                changed: self.pause_game(),
            },
            RunnerIntent::ResumeGame => IntentOutcome::Transition {
                changed: self.resume_game(),
            },
            RunnerIntent::QuitToMenu => {
                self.quit_to_menu();
                IntentOutcome::Transition { changed: true }
            }
            RunnerIntent::OpenShop => IntentOutcome::Transition {
                changed: self.open_shop(),
            },
            RunnerIntent::CloseShop => IntentOutcome::Transition {
                changed: self.close_shop(),
            },
            RunnerIntent::OpenRecharge => IntentOutcome::Transition {
                changed: self.open_recharge(),
            },
            RunnerIntent::CloseRecharge => IntentOutcome::Transition {
                changed: self.close_recharge(),
            },
            RunnerIntent::TakeDamage => IntentOutcome::Damage(self.take_damage()),
            RunnerIntent::CollectGem(value) => IntentOutcome::Gem {
                points: self.collect_gem(value),
            },
            RunnerIntent::CollectLetter(index) => {
                IntentOutcome::Letter(self.collect_letter(index))
            }
            RunnerIntent::SetDistance(distance) => {
                self.set_distance(distance);
                IntentOutcome::DistanceSet
            }
            RunnerIntent::BuyItem { kind, cost } => IntentOutcome::Purchase {
                success: self.buy_item(kind, cost),
            },
            RunnerIntent::UseItem(kind) => IntentOutcome::ItemUsed {
                success: self.use_item(kind),
            },
            RunnerIntent::RedeemKey(code) => IntentOutcome::Redeemed(self.redeem_key(&code)),
        }
    }
}
