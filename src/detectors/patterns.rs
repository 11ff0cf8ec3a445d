use regex::{Regex, RegexBuilder};

/// Decision-language patterns
pub static DECISION_PATTERNS: &[&str] = &[
    r"\b(?:we|let's|let us|we'll|we will|we should|we need to|we must)\s+(?:decide|decided|deciding|decision)",
    r"\b(?:decide|decided|deciding|decision)\s+(?:to|on|that|whether)",
    r"\b(?:let's|let us)\s+(?:do|go|make|choose|pick|select)",
    r"\b(?:we|I|they)\s+(?:decided|agreed|chose|selected|picked)",
    r"\b(?:final|finalize|finalized|conclusion|conclude)",
    r"\b(?:settle|settled|settling)\s+(?:on|for|with)",
];

/// Action-item patterns: explicit markers, obligation verbs, assignment,
/// deadlines, follow-ups
pub static ACTION_PATTERNS: &[&str] = &[
    r"\b(?:TODO|todo|TBD|tbd|action item|action items)",
    r"\b(?:will|shall|should|must|need to|going to)\s+(?:do|complete|finish|implement|deliver|send|create|make)",
    r"\b(?:assign|assigned|assignment)\s+(?:to|for)",
    r"\b(?:by|deadline|due)\s+(?:tomorrow|next week|end of|EOD|EOB|ASAP|asap)",
    r"\b(?:follow up|follow-up|followup)\s+(?:on|with|about)",
];

/// Agreement patterns: explicit verbs, affirmations, endorsement idioms
pub static AGREEMENT_PATTERNS: &[&str] = &[
    r"\b(?:agree|agreed|agreement|agrees)\b",
    r"\b(?:yes|yeah|yep|yup|sure|absolutely|definitely|exactly|right|correct)\b",
    r"\b(?:I|we)\s+(?:agree|concur|approve|accept|support)\b",
    r"\b(?:sounds good|sounds great|that works|that's fine|that's good)\b",
    r"\b(?:consensus|unanimous|unanimously)\b",
];

/// Disagreement patterns: negation, contrastives, objection and concern vocabulary
pub static DISAGREEMENT_PATTERNS: &[&str] = &[
    r"\b(?:disagree|disagreed|disagreement|disagrees)\b",
    r"\b(?:no|nope|nah|not really|I don't think|I disagree|I don't agree)\b",
    r"\b(?:but|however|although|though|on the other hand|contrary)\b",
    r"\b(?:object|objection|oppose|opposed|against)\b",
    r"\b(?:concern|concerned|worried|issue|problem|conflict)\b",
];

/// Question patterns: literal mark, wh-words, modal+pronoun, auxiliary+demonstrative
///
/// The literal `?` alternative never fires on sentence pieces (the splitter
/// consumes terminators) but is kept for callers matching raw text.
pub static QUESTION_PATTERNS: &[&str] = &[
    r"\?",
    r"\b(?:what|when|where|who|why|how|which|whose|whom)\s+",
    r"\b(?:can|could|would|should|will|shall|may|might)\s+(?:you|we|they|I|it)\s+",
    r"\b(?:is|are|was|were|do|does|did|have|has|had)\s+(?:there|it|this|that|he|she|they)\s+",
];

/// Assignee capture templates, tried in order; first capture wins
///
/// Deliberately case-sensitive: the capitalized-name group is the whole
/// heuristic.
pub static ASSIGNEE_PATTERNS: &[&str] = &[
    r"(?:assign|assigned|for|to)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)",
    r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\s+(?:will|should|must|needs to)",
    r"(?:let|have)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\s+",
];

/// Urgency keyword tiers, checked in priority order
pub static URGENCY_NOW: &[&str] = &[
    "now",
    "immediately",
    "right away",
    "asap",
    "urgent",
    "critical",
    "emergency",
];
pub static URGENCY_SOON: &[&str] = &[
    "soon",
    "today",
    "this week",
    "by tomorrow",
    "quickly",
    "promptly",
];
pub static URGENCY_LATER: &[&str] = &[
    "later",
    "next week",
    "eventually",
    "when possible",
    "no rush",
];

/// All scanner regexes, compiled once and shared by every detection call
#[derive(Debug)]
pub struct PatternLibrary {
    pub decision: Regex,
    pub action: Regex,
    pub agreement: Regex,
    pub disagreement: Regex,
    pub question: Regex,
    pub assignee: Vec<Regex>,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self {
            decision: compile_union(DECISION_PATTERNS),
            action: compile_union(ACTION_PATTERNS),
            agreement: compile_union(AGREEMENT_PATTERNS),
            disagreement: compile_union(DISAGREEMENT_PATTERNS),
            question: compile_union(QUESTION_PATTERNS),
            assignee: ASSIGNEE_PATTERNS
                .iter()
                .map(|p| Regex::new(p).expect("assignee pattern should compile"))
                .collect(),
        }
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Join a pattern set into one case-insensitive union regex
fn compile_union(patterns: &[&str]) -> Regex {
    RegexBuilder::new(&patterns.join("|"))
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .expect("pattern set should compile")
}
