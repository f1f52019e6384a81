//! Story model: the ordered list of annotations stepped through on the chart.
//!
//! An annotation may belong to a numbered event. Event annotations carry a
//! long-form narrative that replaces the short callout when the reader drills
//! down, and they get a dedicated event page.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::series::Series;

/// Default callout text wrap width in pixels
pub const DEFAULT_WRAP_WIDTH: f32 = 190.0;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur while building or loading a story
#[derive(Debug, Error)]
pub enum StoryError {
    /// The story file could not be read
    #[error("Failed to read story file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The story file is not valid JSON
    #[error("Failed to parse story file: {0}")]
    Json(#[from] serde_json::Error),

    /// A story needs at least one annotation to step through
    #[error("Story has no annotations")]
    Empty,

    /// An event annotation has no long-form narrative
    #[error("Annotation {index} ({title}) is an event but has no long form")]
    MissingLongForm { index: usize, title: String },

    /// A long-form narrative is attached to a plain annotation
    #[error("Annotation {index} ({title}) has a long form but no event id")]
    UnexpectedLongForm { index: usize, title: String },

    /// Two annotations claim the same event id
    #[error("{0} is used by more than one annotation")]
    DuplicateEvent(EventId),

    /// The annotation timestamp is not one of the sample timestamps
    #[error("Annotation {index} ({title}) at {timestamp} does not match any sample")]
    NoMatchingSample {
        index: usize,
        title: String,
        timestamp: i64,
    },

    /// No annotation carries the requested event id
    #[error("{0} does not exist in this story")]
    UnknownEvent(EventId),
}

// ============================================================================
// Core Types
// ============================================================================

/// Identifier of a drill-down capable event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u8);

impl EventId {
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Page name used by the standalone event view (`event<N>`)
    pub fn page_name(&self) -> String {
        format!("event{}", self.0)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event {}", self.0)
    }
}

/// Callout offset from the anchor point, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

fn default_wrap_width() -> f32 {
    DEFAULT_WRAP_WIDTH
}

/// The drill-down variant of an event annotation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LongForm {
    pub text: String,
    #[serde(default)]
    pub offset: Offset,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: f32,
}

/// A labeled callout anchored at one sample
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Anchor timestamp, must equal a sample timestamp
    pub timestamp: i64,
    /// Anchor value on the price axis
    pub value: f64,
    pub title: String,
    #[serde(rename = "text")]
    pub short_text: String,
    #[serde(default)]
    pub offset: Offset,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<EventId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_form: Option<LongForm>,
}

impl Annotation {
    /// Title as shown on the callout, with the event label when present
    pub fn display_title(&self) -> String {
        match self.event {
            Some(event) => format!("{} -- {}", self.title, event),
            None => self.title.clone(),
        }
    }

    /// Whether the annotation supports the show/back drill-down
    pub fn has_detail(&self) -> bool {
        self.event.is_some()
    }
}

// ============================================================================
// Story
// ============================================================================

/// Ordered, validated annotations
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Story {
    annotations: Vec<Annotation>,
}

impl Story {
    /// Build a story, checking event ids and long forms pair up
    pub fn new(annotations: Vec<Annotation>) -> Result<Self, StoryError> {
        if annotations.is_empty() {
            return Err(StoryError::Empty);
        }

        let mut seen: Vec<EventId> = Vec::new();
        for (index, annotation) in annotations.iter().enumerate() {
            match (annotation.event, &annotation.long_form) {
                (Some(_), None) => {
                    return Err(StoryError::MissingLongForm {
                        index,
                        title: annotation.title.clone(),
                    })
                }
                (None, Some(_)) => {
                    return Err(StoryError::UnexpectedLongForm {
                        index,
                        title: annotation.title.clone(),
                    })
                }
                (Some(event), Some(_)) => {
                    if seen.contains(&event) {
                        return Err(StoryError::DuplicateEvent(event));
                    }
                    seen.push(event);
                }
                (None, None) => {}
            }
        }

        Ok(Self { annotations })
    }

    /// Parse a story JSON document (`{"annotations": [...]}`)
    pub fn from_json_str(content: &str) -> Result<Self, StoryError> {
        #[derive(Deserialize)]
        struct RawStory {
            annotations: Vec<Annotation>,
        }

        let raw: RawStory = serde_json::from_str(content)?;
        Self::new(raw.annotations)
    }

    /// Read and parse a story file
    pub fn load(path: &Path) -> Result<Self, StoryError> {
        let content = std::fs::read_to_string(path).map_err(|source| StoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let story = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded story with {} annotations from {:?}",
            story.len(),
            path
        );
        Ok(story)
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn get(&self, index: usize) -> Option<&Annotation> {
        self.annotations.get(index)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// All event ids in story order
    pub fn events(&self) -> impl Iterator<Item = EventId> + '_ {
        self.annotations.iter().filter_map(|a| a.event)
    }

    /// Position and annotation of an event
    pub fn event(&self, event: EventId) -> Result<(usize, &Annotation), StoryError> {
        self.annotations
            .iter()
            .enumerate()
            .find(|(_, a)| a.event == Some(event))
            .ok_or(StoryError::UnknownEvent(event))
    }

    /// Check that every annotation sits exactly on a sample of `series`
    pub fn validate_against(&self, series: &Series) -> Result<(), StoryError> {
        for (index, annotation) in self.annotations.iter().enumerate() {
            if series.position_of(annotation.timestamp).is_none() {
                tracing::warn!(
                    "Annotation {:?} at {} has no matching sample",
                    annotation.title,
                    annotation.timestamp
                );
                return Err(StoryError::NoMatchingSample {
                    index,
                    title: annotation.title.clone(),
                    timestamp: annotation.timestamp,
                });
            }
        }
        Ok(())
    }

    /// The built-in LUNA/UST collapse story
    pub fn luna() -> Self {
        let plain = |timestamp: i64, value: f64, title: &str, text: &str, offset, wrap| {
            Annotation {
                timestamp,
                value,
                title: title.to_string(),
                short_text: text.to_string(),
                offset,
                wrap_width: wrap,
                event: None,
                long_form: None,
            }
        };
        let event = |annotation: Annotation, id: u8, long_text: &str, offset, wrap| Annotation {
            event: Some(EventId(id)),
            long_form: Some(LongForm {
                text: long_text.to_string(),
                offset,
                wrap_width: wrap,
            }),
            ..annotation
        };

        Self {
            annotations: vec![
                plain(
                    1582588800000,
                    0.24526159357715532,
                    "Feb.24 2020",
                    "A South Korean crypto exchange launches the first LUNA staking product",
                    Offset::new(-100.0, -100.0),
                    190.0,
                ),
                plain(
                    1600732800000,
                    0.28865689959065377,
                    "Sept.21 2020",
                    "UST, the Terra blockchain's stablecoin, is publicly announced, with plans to launch on the Ethereum and Solana networks.",
                    Offset::new(-100.0, -100.0),
                    190.0,
                ),
                event(
                    plain(
                        1632268800000,
                        24.94675830843755,
                        "Sept.21 2021",
                        "After hitting its all time high, the price drop sharply after U.S. Securities and Exchange Commission subpoenas Terraform Labs founder Do Kwon.",
                        Offset::new(-175.0, -100.0),
                        190.0,
                    ),
                    1,
                    LONG_FORM_EVENT_1,
                    Offset::new(-100.0, -100.0),
                    500.0,
                ),
                plain(
                    1640563200000,
                    99.91986954719897,
                    "Dec.22 2021",
                    "LUNA's price nearly hit 100, extending a four-month winning trend and decoupling from the weak trend in other top coins.",
                    Offset::new(-100.0, 50.0),
                    200.0,
                ),
                event(
                    plain(
                        1645574400000,
                        54.66896323920333,
                        "Feb.22 2022",
                        "Luna Foundation Guard launches, raising $1 billion to buy Bitcoin for UST's reserve system.",
                        Offset::new(-2.0, 130.0),
                        160.0,
                    ),
                    2,
                    LONG_FORM_EVENT_2,
                    Offset::new(-200.0, -100.0),
                    500.0,
                ),
                event(
                    plain(
                        1646956800000,
                        101.31585398716065,
                        "Mar-Apr 2022",
                        "LFG continued to purchase billion dollars worth of Bitcoin as LUNA price pushes to all time highs.",
                        Offset::new(-5.0, -5.0),
                        190.0,
                    ),
                    3,
                    LONG_FORM_EVENT_3,
                    Offset::new(-250.0, 50.0),
                    500.0,
                ),
                event(
                    plain(
                        1652400000000,
                        0.0012191899563018388,
                        "May.12 2022",
                        "The LUNA price falls 96% in a day, pushing it to less than 10 cents.",
                        Offset::new(0.0, -100.0),
                        100.0,
                    ),
                    4,
                    LONG_FORM_EVENT_4,
                    Offset::new(-350.0, -300.0),
                    600.0,
                ),
            ],
        }
    }
}

const LONG_FORM_EVENT_1: &str = "After hitting its all time high, the price dropped sharply after U.S. Securities and Exchange Commission subpoenas Terraform Labs founder Do Kwon. At issue is Terra's Mirror Protocol, a decentralized finance (DeFi) platform on which synthetic stocks mirroring the price of major U.S. firms are minted and traded. The subpoena requests that Kwon provide testimony to U.S. regulators. As a resident of South Korea, Kwon is contesting the subpoena. Terraform's lawsuit against the SEC is unusual but, according to Anderson Kill lawyer Stephen Palley, preemptive legal action might make sense in this case. The SEC told Terraform's lawyers the U.S. regulator might sue the company. \u{201c}In a conversation on September 15, 2021, the SEC attorneys advised that they believe that some sort of enforcement action was warranted against TFL [Terraform Labs] and any cooperation, and implementation of remedial actions as to the Mirror Protocol, would result in a reduced financial sanction as part of any consent agreement,\u{201d} according to the lawsuit. Five days later, Kwon was served. \u{201c}The subpoenas were served on Mr. Kwon in public: Mr. Kwon was approached by the process server as he exited an escalator at the Mainnet Summit while on his way to make a scheduled presentation that was not about the Mirror Protocol,\u{201d} the suit said.";

const LONG_FORM_EVENT_2: &str = "After Do Kwon announced the launch of Luna Foundation Guard, it raised $1 billion through the sale of LUNA tokens to buy Bitcoin for UST's reserve system with Jump Crypto and Three Arrows Capital as lead investors. The Luna Foundation Guard (LFG), a non-profit organization based in Singapore, has announced its formation and mission objective to support and sustain the growth and development of open-source technology, facilitating the realization of a decentralized economy. The entity, whose first prerogative is to focus on building reserves to better safeguard the UST peg during adverse market conditions, and second, allocating grants funding the development of the Terra ecosystem. LFG received an initial gift allocation of 50 million LUNA from Terraform Labs (TFL) to launch its intended initiatives. The funding will go toward building a bitcoin-denominated foreign-exchange reserve for UST, an algorithmic-based stablecoin in the Terra ecosystem, according to a statement.";

const LONG_FORM_EVENT_3: &str = "LFG continued to purchase billion dollars worth of BTC, Do Kown and other influential crypto investor tweeted to push the LUNA price to all time high. the Luna Foundation Guard\u{2019}s (LFG) bitcoin wallet address purchased more than 27,000 BTC worth roughly $1.3 billion. The foundation is delivering on its month-old promise to add BTC as an additional layer of security for UST, which is Terra's decentralized dollar-pegged stablecoin. Do Kwon, the foundation's director, confirmed the address to Bitcoin Magazine in an email, which was also marked by OKLink, a blockchain information website. There appears to be a synergy between bitcoin and the Terra ecosystem, according to Lucas Outumuro, head of research at IntoTheBlock, a crypto data company. UST benefits from having additional backing and bitcoin benefits not just from the buying pressure, but also from having a stable medium of exchange backed by BTC, Outumuro wrote in an email to CoinDesk. On March 23, Do Kwon tweets \u{201c}By my hand DAI will die\u{201d} as he begins in earnest plans to starve off decentralized stablecoin DAI\u{2019}s liquidity on Curve. On March 29, Kyle Davies, co-founder of influential trading firm Three Arrows Capital, tweets, \u{201c}Grandpa, what was the world like when $LUNA was less than three digits?\u{201d}";

const LONG_FORM_EVENT_4: &str = "The LUNA price falls 96% in a day, pushing it to less than 10 cents. On May 7, signs of capital flight from UST: Curve Whale Watching, a bot that monitors and tweets large amounts of swaps, shows an 85 million UST swap for 84.5 million USDC. On May 8, UST dropped to a low of $0.985 on Saturday after a series of large dumps of UST on Terra\u{2019}s lending protocol Anchor and stablecoin exchange protocol Curve. On May 8, LFG commits to loaning $750 million of BTC to market makers to defend the peg of UST and another $750 million of UST to be used to buy back BTC after volatility subsides. On the same day, Do Kwon jokes his way out of UST\u{2019}s depegging risk. On May 9, Deposits on the Anchor protocol plunge below $9 billion from $14 billion after UST struggles to recover to $1. ANC, the protocol\u{2019}s token, fell 35% during the day. And UST loses its $1 peg for the second time and falls to as low as 35 cents. Do Kwon again tweets, \u{201c}Deploying more capital \u{2013} steady lads.\u{201d} On May 10, Claims that UST\u{2019}s depeg is due to a Soros-esque attack begin to emerge. On May 11, More than half, 58%, of traders place futures bets on higher LUNA prices despite Tuesday\u{2019}s drop, leading to $63 million in liquidations. LUNA reaches price levels previously seen in August 2021. Value locked on Anchor, Terra\u{2019}s largest decentralized finance (DeFi) protocol, drops $11 billion over two days. Do Kwon is revealed to be one of the pseudonymous co-founders behind the failed algorithmic stablecoin Basis Cash, CoinDesk reports. After LUNA almost lost all of its token value, The Terra blockchain is halted for the second time at block 7607789 but resumes activity after around nine hours. The Okx and Binance exchanges end trading of Terra tokens after UST loses its dollar peg and LUNA slumps by more than 99%.";
