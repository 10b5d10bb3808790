//! Card content model.
//!
//! All copy on the card is data, not markup: the frontend renders whatever
//! this model carries. The built-in card ships as `CardContent::default()`;
//! a custom card can be loaded from JSON with [`CardContent::from_path`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::choice::ChoiceOption;
use crate::error::CardError;

/// Everything written on the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardContent {
    /// Who the card is for
    pub recipient: String,
    /// How the sender signs off
    pub sender: String,
    pub welcome: WelcomeContent,
    pub apology: ApologyContent,
    pub feelings: Vec<FeelingCard>,
    pub importance: Vec<ImportanceItem>,
    pub birthday: BirthdayContent,
    pub wishes: Vec<WishItem>,
    pub promises: Vec<PromiseItem>,
    pub choice: ChoiceContent,
    pub surprise: SurpriseContent,
    pub finale: FinaleContent,
}

/// First section: the greeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WelcomeContent {
    pub title: String,
    pub greeting_lines: Vec<String>,
    pub subtitle: String,
}

/// Apology section: typewriter lines plus an extra message revealed on tap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApologyContent {
    pub heading: String,
    pub typed_lines: Vec<String>,
    pub reveal_label: String,
    pub extra_heading: String,
    pub extra_lines: Vec<String>,
}

/// One "what you mean to me" card; tapping it shows `message` in a bubble.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeelingCard {
    pub icon: String,
    pub title: String,
    pub body: String,
    pub message: String,
}

/// One "why you matter" item; tapping it shows `message` in a bubble.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportanceItem {
    pub icon: String,
    pub title: String,
    pub body: String,
    pub message: String,
}

/// Birthday section: the confetti one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthdayContent {
    pub heading: String,
    pub lines: Vec<String>,
    pub reveal_label: String,
    pub wish_heading: String,
    pub wish_lines: Vec<String>,
}

/// One wish; tapping expands `detail`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WishItem {
    pub icon: String,
    pub title: String,
    pub detail: String,
}

/// One promise on the timeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromiseItem {
    pub title: String,
    pub body: String,
}

/// The binary choice: prompt, two buttons, one response block per option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceContent {
    pub prompt: String,
    pub subtitle: String,
    pub forgive_label: String,
    pub need_time_label: String,
    pub forgive_response: Vec<String>,
    pub need_time_response: Vec<String>,
}

impl ChoiceContent {
    /// The response text block for an option.
    pub fn response_for(&self, option: ChoiceOption) -> &[String] {
        match option {
            ChoiceOption::Forgive => &self.forgive_response,
            ChoiceOption::NeedTime => &self.need_time_response,
        }
    }
}

/// Surprise section: the sparkle one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurpriseContent {
    pub heading: String,
    pub lines: Vec<String>,
}

/// Last section: the closing letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinaleContent {
    pub heading: String,
    pub lines: Vec<String>,
    pub reveal_label: String,
    pub closing_heading: String,
    pub closing_lines: Vec<String>,
}

impl CardContent {
    /// Load a card from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CardError> {
        let raw = std::fs::read_to_string(path)?;
        let content: Self = serde_json::from_str(&raw)?;
        content.validate()?;
        Ok(content)
    }

    /// A card needs a recipient and both choice responses to make sense;
    /// everything else may be empty.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.recipient.trim().is_empty() {
            return Err(CardError::InvalidContent("recipient is empty".into()));
        }
        if self.choice.forgive_response.is_empty() || self.choice.need_time_response.is_empty() {
            return Err(CardError::InvalidContent(
                "both choice responses must have text".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CardContent {
    fn default() -> Self {
        Self {
            recipient: "My Love".into(),
            sender: "Forever yours".into(),
            welcome: WelcomeContent::default(),
            apology: ApologyContent::default(),
            feelings: vec![
                FeelingCard {
                    icon: "🌅".into(),
                    title: "My First Thought".into(),
                    body: "Every morning starts with you, even when you're not there.".into(),
                    message: "You're the first thing on my mind, every single day.".into(),
                },
                FeelingCard {
                    icon: "🏡".into(),
                    title: "My Home".into(),
                    body: "Wherever you are is where I belong.".into(),
                    message: "Home was never a place. It was always you.".into(),
                },
                FeelingCard {
                    icon: "🌙".into(),
                    title: "My Calm".into(),
                    body: "On the loudest days, you are the quiet I come back to.".into(),
                    message: "You steady me without even trying.".into(),
                },
            ],
            importance: vec![
                ImportanceItem {
                    icon: "💗".into(),
                    title: "You make me kinder".into(),
                    body: "I'm a better person with you than I ever was alone.".into(),
                    message: "You bring out a softness in me nobody else has found.".into(),
                },
                ImportanceItem {
                    icon: "✨".into(),
                    title: "You make everything brighter".into(),
                    body: "Ordinary days turn golden when you're in them.".into(),
                    message: "Even errands feel like adventures with you.".into(),
                },
                ImportanceItem {
                    icon: "🌱".into(),
                    title: "You help me grow".into(),
                    body: "You believe in the person I'm still becoming.".into(),
                    message: "Thank you for seeing who I could be.".into(),
                },
            ],
            birthday: BirthdayContent::default(),
            wishes: vec![
                WishItem {
                    icon: "🌟".into(),
                    title: "That every dream finds you".into(),
                    detail: "The quiet ones you've never said out loud, too. I hope this year \
                             carries you closer to all of them."
                        .into(),
                },
                WishItem {
                    icon: "😂".into(),
                    title: "That you laugh every day".into(),
                    detail: "The real kind, the kind that makes your eyes crinkle and your \
                             stomach hurt."
                        .into(),
                },
                WishItem {
                    icon: "🛡️".into(),
                    title: "That you always feel safe".into(),
                    detail: "Loved, protected, and certain of your place in my heart.".into(),
                },
                WishItem {
                    icon: "🎈".into(),
                    title: "That this year is your best yet".into(),
                    detail: "Full of small joys, big wins, and moments worth keeping.".into(),
                },
            ],
            promises: vec![
                PromiseItem {
                    title: "To listen first".into(),
                    body: "Before I explain, before I defend. Your feelings come first.".into(),
                },
                PromiseItem {
                    title: "To show up".into(),
                    body: "On the hard days, the boring days, and every day in between.".into(),
                },
                PromiseItem {
                    title: "To never make you feel small".into(),
                    body: "You will never have to wonder whether you matter to me.".into(),
                },
                PromiseItem {
                    title: "To keep choosing you".into(),
                    body: "Today, tomorrow, and every day I'm lucky enough to get.".into(),
                },
            ],
            choice: ChoiceContent::default(),
            surprise: SurpriseContent::default(),
            finale: FinaleContent::default(),
        }
    }
}

impl Default for WelcomeContent {
    fn default() -> Self {
        Self {
            title: "Happy Birthday".into(),
            greeting_lines: vec![
                "Today is your day.".into(),
                "And I have some things I need to say.".into(),
            ],
            subtitle: "Scroll down, one page at a time. 💌".into(),
        }
    }
}

impl Default for ApologyContent {
    fn default() -> Self {
        Self {
            heading: "I'm Sorry".into(),
            typed_lines: vec![
                "I know I hurt you, and I hate that I did.".into(),
                "You deserved better from me, especially now.".into(),
                "I'm not writing this to excuse it. I'm writing it because you matter more \
                 to me than my pride ever will."
                    .into(),
            ],
            reveal_label: "There's more…".into(),
            extra_heading: "💗 More from my heart…".into(),
            extra_lines: vec![
                "This mistake doesn't define how I feel about you. You are the most \
                 important person in my life, and I will do everything to make sure you \
                 never feel unimportant again."
                    .into(),
                "Your happiness means everything to me, and I'm committed to being better, \
                 for you."
                    .into(),
            ],
        }
    }
}

impl Default for BirthdayContent {
    fn default() -> Self {
        Self {
            heading: "🎂 Happy Birthday 🎂".into(),
            lines: vec![
                "Another year of you — the world's quietly lucky for it.".into(),
                "I hope today feels as special as you make every day feel for me.".into(),
            ],
            reveal_label: "A special wish ✨".into(),
            wish_heading: "🎂 A Special Birthday Wish".into(),
            wish_lines: vec![
                "On your special day, I wish for you to feel loved, cherished, and \
                 celebrated. You deserve all the happiness in the world."
                    .into(),
                "May this year bring you everything you've ever dreamed of, and may all \
                 your wishes come true."
                    .into(),
            ],
        }
    }
}

impl Default for ChoiceContent {
    fn default() -> Self {
        Self {
            prompt: "Can you forgive me?".into(),
            subtitle: "Whatever you choose, I'll understand.".into(),
            forgive_label: "Yes, I forgive you 💗".into(),
            need_time_label: "I need more time 💭".into(),
            forgive_response: vec![
                "💗".into(),
                "Thank you, from the bottom of my heart.".into(),
                "Your forgiveness means everything to me.".into(),
                "I promise to do better and show you every day how much you mean to me."
                    .into(),
            ],
            need_time_response: vec![
                "💙".into(),
                "I understand, and I respect your feelings.".into(),
                "I'll give you the space you need, but I want you to know that I'm here \
                 whenever you're ready."
                    .into(),
                "I'll keep trying to make things right, because you're worth it.".into(),
            ],
        }
    }
}

impl Default for SurpriseContent {
    fn default() -> Self {
        Self {
            heading: "✨ A Little Surprise ✨".into(),
            lines: vec![
                "I made this whole thing for you.".into(),
                "Every page, every sparkle — because you're worth the effort.".into(),
                "And this is only the beginning of making it up to you.".into(),
            ],
        }
    }
}

impl Default for FinaleContent {
    fn default() -> Self {
        Self {
            heading: "💌 One Last Thing".into(),
            lines: vec![
                "Thank you for reading all the way here.".into(),
                "Thank you for your patience, and for giving me the chance to make \
                 things right."
                    .into(),
            ],
            reveal_label: "Open the last note 💌".into(),
            closing_heading: "💌 From me to you".into(),
            closing_lines: vec![
                "I know I'm not perfect, but I promise to keep trying, to keep learning, \
                 and to keep loving you with everything I have."
                    .into(),
                "Happy birthday. You are my everything.".into(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_card_is_valid() {
        let content = CardContent::default();
        assert!(content.validate().is_ok());
    }

    #[test]
    fn default_card_is_fully_populated() {
        let content = CardContent::default();
        assert!(!content.welcome.greeting_lines.is_empty());
        assert!(!content.apology.typed_lines.is_empty());
        assert!(!content.feelings.is_empty());
        assert!(!content.importance.is_empty());
        assert!(!content.birthday.wish_lines.is_empty());
        assert!(!content.wishes.is_empty());
        assert!(!content.promises.is_empty());
        assert!(!content.surprise.lines.is_empty());
        assert!(!content.finale.closing_lines.is_empty());
    }

    #[test]
    fn responses_match_options() {
        let choice = ChoiceContent::default();
        assert_eq!(
            choice.response_for(ChoiceOption::Forgive),
            choice.forgive_response.as_slice()
        );
        assert_eq!(
            choice.response_for(ChoiceOption::NeedTime),
            choice.need_time_response.as_slice()
        );
    }

    #[test]
    fn empty_recipient_is_rejected() {
        let content = CardContent {
            recipient: "   ".into(),
            ..CardContent::default()
        };
        assert!(matches!(
            content.validate(),
            Err(CardError::InvalidContent(_))
        ));
    }

    #[test]
    fn missing_choice_response_is_rejected() {
        let content = CardContent {
            choice: ChoiceContent {
                forgive_response: Vec::new(),
                ..ChoiceContent::default()
            },
            ..CardContent::default()
        };
        assert!(content.validate().is_err());
    }
}
