//! Rule violations reported to the issuer of a rejected command.

use core::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleViolation {
    NotYourTurn,
    UserNoHasCard,
    AttackTimeOver,
    DefendTimeOver,
    NoSameRankCardInTable,
    NotFoundCardOnTable,
    TargetCardGreaterThenYour,
    GameShouldBeStarted,
    CannotEndAttackInFirstTurn,
    AllCardShouldBeBeatOffBeforeEndAttack,
    TableHoldsOnlySixCards,
    DefenderNoCards,
    UserAlreadyReady,
    UnregisteredAction,
    /// Mutation disagreed with a checker that had passed.
    ServerError,
}

impl RuleViolation {
    pub const ALL: [RuleViolation; 15] = [
        Self::NotYourTurn,
        Self::UserNoHasCard,
        Self::AttackTimeOver,
        Self::DefendTimeOver,
        Self::NoSameRankCardInTable,
        Self::NotFoundCardOnTable,
        Self::TargetCardGreaterThenYour,
        Self::GameShouldBeStarted,
        Self::CannotEndAttackInFirstTurn,
        Self::AllCardShouldBeBeatOffBeforeEndAttack,
        Self::TableHoldsOnlySixCards,
        Self::DefenderNoCards,
        Self::UserAlreadyReady,
        Self::UnregisteredAction,
        Self::ServerError,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::UserNoHasCard => "USER_NO_HAS_CARD",
            Self::AttackTimeOver => "ATTACK_TIME_OVER",
            Self::DefendTimeOver => "DEFEND_TIME_OVER",
            Self::NoSameRankCardInTable => "NO_SAME_RANK_CARD_IN_TABLE",
            Self::NotFoundCardOnTable => "NOT_FOUND_CARD_ON_TABLE",
            Self::TargetCardGreaterThenYour => "TARGET_CARD_GREATER_THEN_YOUR",
            Self::GameShouldBeStarted => "GAME_SHOULD_BE_STARTED",
            Self::CannotEndAttackInFirstTurn => "CANNOT_END_ATTACK_IN_FIRST_TURN",
            Self::AllCardShouldBeBeatOffBeforeEndAttack => {
                "ALL_CARD_SHOULD_BE_BEAT_OFF_BEFORE_END_ATTACK"
            }
            Self::TableHoldsOnlySixCards => "TABLE_HOLDS_ONLY_SIX_CARDS",
            Self::DefenderNoCards => "DEFENDER_NO_CARDS",
            Self::UserAlreadyReady => "USER_ALREADY_READY",
            Self::UnregisteredAction => "UNREGISTERED_ACTION",
            Self::ServerError => "SERVER_ERROR",
        }
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RuleViolation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
