//! Closed-class word lists and suffix rules for the English tagger.
//!
//! These are plain static slices; `LexiconTagger` copies them into hash sets on first use.

/// English stop words. Tokens in this list are flagged `is_stop` regardless of their tag.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "also", "although",
    "always", "am", "among", "an", "and", "another", "any", "anyone", "anything", "are",
    "around", "as", "at", "be", "became", "because", "become", "been", "before", "being",
    "below", "between", "both", "but", "by", "can", "cannot", "could", "did", "do", "does",
    "doing", "done", "down", "during", "each", "either", "else", "enough", "etc", "even",
    "ever", "every", "few", "first", "for", "from", "full", "further", "get", "give", "go",
    "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "however", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "last", "least", "less", "made", "make", "many", "may", "me", "might", "more", "most",
    "much", "must", "my", "myself", "neither", "never", "no", "nor", "not", "nothing", "now",
    "of", "off", "often", "on", "once", "one", "only", "or", "other", "others", "our", "ours",
    "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put", "quite",
    "rather", "really", "same", "see", "seem", "several", "she", "should", "show", "since",
    "so", "some", "something", "still", "such", "take", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "though", "through", "thus", "to", "together", "too", "top", "toward", "under", "until",
    "up", "upon", "us", "used", "using", "various", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "where", "whether", "which", "while", "who", "whole", "whom",
    "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours", "yourself", "yourselves",
];

pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "all", "both", "another", "such", "what", "which", "whatever",
];

pub const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us", "our",
    "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "whose", "someone", "anyone", "everyone", "something", "anything", "everything", "nothing",
];

pub const ADPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "despite",
    "down", "during", "for", "from", "in", "inside", "into", "like", "near", "of", "off",
    "on", "onto", "out", "outside", "over", "per", "since", "through", "throughout", "toward",
    "towards", "under", "until", "upon", "via", "with", "within", "without",
];

pub const COORDINATING_CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "so", "plus"];

pub const SUBORDINATING_CONJUNCTIONS: &[&str] = &[
    "although", "because", "if", "once", "than", "though", "unless", "whereas", "whether",
    "while", "when", "where", "as",
];

pub const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "can", "could", "should", "shall", "may", "might",
    "must",
];

pub const PARTICLES: &[&str] = &["to", "not", "n't", "'s"];

/// Common verbs found in job descriptions and résumé bullets.
pub const VERBS: &[&str] = &[
    "seeking", "seek", "build", "builds", "building", "develop", "develops", "design",
    "designs", "lead", "leads", "manage", "manages", "create", "creates", "join", "work",
    "works", "working", "collaborate", "deliver", "delivers", "drive", "drives", "own",
    "owns", "implement", "implements", "maintain", "maintains", "improve", "improves",
    "support", "supports", "write", "writes", "writing", "ship", "ships", "mentor", "apply",
    "looking", "including", "require", "requires", "prefer", "launch", "scale", "optimize",
    "optimise", "architect", "deploy", "deploys", "analyze", "analyse", "help", "helps",
    "ensure", "ensures", "use", "uses", "know", "learn",
];

/// Descriptive words that commonly precede a skill noun.
pub const ADJECTIVES: &[&str] = &[
    "familiar", "strong", "senior", "junior", "excellent", "good", "great", "new", "large",
    "small", "modern", "full-stack", "fullstack", "remote", "hybrid", "solid", "deep",
    "proven", "hands-on", "fast", "fast-paced", "complex", "scalable", "reliable", "key",
    "relevant", "preferred", "required", "plus", "similar", "other", "able", "responsible",
];

pub const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less"];

/// Characters that keep a token together but mark it as a proper name (`node.js`, `c++`).
pub const PROPER_NAME_MARKERS: &[char] = &['.', '+', '#', '/'];
