//! The fixed phrase corpus and the process-wide lexicon built from it.

use crate::instruction::InstructionSet;
use crate::validation::validate_lexicon;
use mission_core::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Lexical category of a sentence slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Preamble,
    Adverb,
    Verb,
    Adjective,
    Noun,
    Conjunction,
    Conclusion,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Preamble,
        Category::Adverb,
        Category::Verb,
        Category::Adjective,
        Category::Noun,
        Category::Conjunction,
        Category::Conclusion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Preamble => "preamble",
            Category::Adverb => "adverb",
            Category::Verb => "verb",
            Category::Adjective => "adjective",
            Category::Noun => "noun",
            Category::Conjunction => "conjunction",
            Category::Conclusion => "conclusion",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::Validation(format!("Unknown category '{}'", s)))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const PREAMBLE: &str = "11Our mission is to
20We
21We will commit to
22We commit to
23We strive to
24We will work to
300Out job is to
310It is our job to
311It is our mission to
312It it our challenge to
313It is our objective to
314It is our responsibility to
320Our challenge is to continue to
321Our job is to continue to
322Our objective is to continue to
323Our mission is to continue to
324We strive to continue to
330We commit to continue to
331We will commit to continue to
332We will work to continue to
333We will strive to continue to
4000It is our inescapable duty to continue to
4100It is our certain duty to continue to
4110It is our solemn and incontrovertible duty to continue to
4111Our solumn and incontrovertible duty is to continue to
";

const ADVERB: &str = "1assertively
20authoritatively
21collaboratively
22competently
23completely
24continually
300conveniently
310dramatically
311efficiently
312enthusiastically
313globally
314interactively
320proactively
321professionally
322quickly
323seamlessly
324synergistically
";

const VERB: &str = "1evolve
20administrate
21build
22coordinate
23create
24customize
300disseminate
310engineer
311enhance
312embrace
313facilitate
314fashion
320foster
321initiate
322integrate
323leverage
324leverage others'
330leverage existing
331maintain
332monetize
333morph
334negotiate
340network
341operationalize
342optimize
343orchestrate
344productize
4000promote
4100provide access to
4110pursue
4111recontextualise
4112restore
4113revolutionize
4114simplify
4120synergize
4121synthesize
4122supply
4123utilize";

const ADJECTIVE: &str = "1best-of-breed
20best practice
21business
22competitive
23corporate
24cost effective
300cutting-edge
310diverse
311e-business
312e-commerce
313e-markets
314e-services
320e-tailers
321economically sound
322effective
323emerging
324enterprise
330enterprise-wide
331error-free
332ethical
333excellent
334extensible
340high standards in
341high-payoff
342high-quality
343holistic
344inexpensive
4000innovative
4100interdependent
4110leading-edge
4111long-term high-impact
4112low-risk high-yield
4113market-driven
4114mission-critical
4120multimedia based
4121next-generation
4122outcome-driven
4123parallel
4124performance based
4130paradigm-shift
4131principle-centered
4132professional
4133progressive
4134prospective
4140quality
4141resource-leveling
4142revolutionary
4143scalable
4144seven-habits-conforming
4200timely
4210unique
4211user-centric
4212value-added
4213viral
4214virtual
4220web 2.0
4221web 3.0
4222world-class";

const NOUN: &str = "1benefits
20catalysts for change
21content
22data
23deliverables
24information
300infrastructures
310intellectual capital
311leadership skills
312materials
313meta-services
314methods
320methods of empowerment
321mindshare
322opportunities
323paradigms
324products
330resources
331services
332solutions
333sources
334technology";

const CONJUNCTION: &str = "1and
20as well as
21to allow us to continue to
22as well as continue to
23in order to
24in order to continue to
300while endeavoring to
310while endeavoring to continue to
311while continuing to
312as well as endeavor to
313as well as endeavor to continue to
";

const CONCLUSION: &str = "1to solve business problems
20to stay relevant in tomorrow's world
21to stay pertinent in tomorrow's world
22while encouraging personal employee growth
23to set us apart from the competition
24to meet our customer's needs
";

/// Literal instruction data for every category
pub const STANDARD_CORPUS: [(Category, &str); 7] = [
    (Category::Preamble, PREAMBLE),
    (Category::Adverb, ADVERB),
    (Category::Verb, VERB),
    (Category::Adjective, ADJECTIVE),
    (Category::Noun, NOUN),
    (Category::Conjunction, CONJUNCTION),
    (Category::Conclusion, CONCLUSION),
];

static STANDARD: OnceLock<Lexicon> = OnceLock::new();

/// One instruction set per category
#[derive(Debug, Clone)]
pub struct Lexicon {
    sets: HashMap<Category, InstructionSet>,
}

impl Lexicon {
    /// Build and validate a lexicon from literal category data
    pub fn from_corpus(corpus: &[(Category, &str)]) -> Result<Self> {
        let mut sets = HashMap::new();
        for (category, data) in corpus {
            let set = InstructionSet::parse(category.as_str(), data)?;
            if sets.insert(*category, set).is_some() {
                return Err(Error::Validation(format!(
                    "Category '{}' defined more than once",
                    category
                )));
            }
        }

        let lexicon = Self { sets };
        validate_lexicon(&lexicon)?;
        Ok(lexicon)
    }

    /// The shared lexicon built from the built-in corpus
    pub fn standard() -> Result<&'static Lexicon> {
        if let Some(lexicon) = STANDARD.get() {
            return Ok(lexicon);
        }
        let lexicon = Self::from_corpus(&STANDARD_CORPUS)?;
        tracing::debug!("Built standard lexicon with {} categories", lexicon.sets.len());
        Ok(STANDARD.get_or_init(|| lexicon))
    }

    pub fn get(&self, category: Category) -> Option<&InstructionSet> {
        self.sets.get(&category)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.sets.contains_key(&category)
    }

    pub fn num_categories(&self) -> usize {
        self.sets.len()
    }
}
