//! Static content tables: the activity catalog, per-band activity
//! allow-lists, and the pre-authored resource entries used by fallback
//! lessons. Plain immutable data plus pure filter functions; no behavior
//! lives here.

use crate::domain::{
  ActivityKind, GradeBand, MultimediaKind, MultimediaResource, PrimarySource, Resource,
  ResourceKind,
};

/// One catalog entry. `description` templates interpolate `{topic}`.
pub struct ActivityTemplate {
  pub name: &'static str,
  pub kind: ActivityKind,
  pub description: &'static str,
  pub benefit: &'static str,
  pub bands: &'static [GradeBand],
}

use ActivityKind::*;
use GradeBand::{Advanced, College, Elementary, High, Middle};

const ALL_BANDS: &[GradeBand] = &[Elementary, Middle, High, Advanced, College];
const MIDDLE_UP: &[GradeBand] = &[Middle, High, Advanced, College];
const HIGH_UP: &[GradeBand] = &[High, Advanced, College];
const ELEM_MIDDLE: &[GradeBand] = &[Elementary, Middle];

/// The full activity catalog. Entry order matters: the generator walks the
/// table front to back and returns the first five allow-listed matches.
pub const ACTIVITY_CATALOG: &[ActivityTemplate] = &[
  ActivityTemplate {
    name: "Interactive Timeline",
    kind: Timeline,
    description: "Build a visual timeline of the key events and turning points of {topic}, placing people, developments, and dates in order",
    benefit: "Develops chronological thinking and helps students see cause-and-effect relationships across a period",
    bands: ALL_BANDS,
  },
  ActivityTemplate {
    name: "Topic Crossword",
    kind: Crossword,
    description: "Solve a crossword puzzle built from the key vocabulary, people, and places of {topic}",
    benefit: "Reinforces essential vocabulary through playful repetition and low-stakes recall practice",
    bands: ELEM_MIDDLE,
  },
  ActivityTemplate {
    name: "Memory Match Cards",
    kind: Memory,
    description: "Play a matching game pairing images, names, and artifacts from {topic}",
    benefit: "Strengthens recall through repetition and makes learning new facts enjoyable for younger students",
    bands: &[Elementary],
  },
  ActivityTemplate {
    name: "Vocabulary Word Search",
    kind: Wordsearch,
    description: "Find the important terms of {topic} hidden in a word-search grid, then define each one",
    benefit: "Builds familiarity with domain vocabulary while keeping early learners actively engaged",
    bands: ELEM_MIDDLE,
  },
  ActivityTemplate {
    name: "Artifact Matching",
    kind: Matching,
    description: "Match pictures of artifacts and places from {topic} to short descriptions of their use and meaning",
    benefit: "Connects concrete objects to abstract ideas, an accessible entry point for visual learners",
    bands: ELEM_MIDDLE,
  },
  ActivityTemplate {
    name: "Storytelling Circle",
    kind: Storytelling,
    description: "Retell an episode from {topic} in your own words as part of a class storytelling circle",
    benefit: "Builds narrative comprehension and oral language skills while personalizing historical content",
    bands: ELEM_MIDDLE,
  },
  ActivityTemplate {
    name: "Role-Play Scenario",
    kind: Roleplay,
    description: "Take on the role of a historical figure from {topic} and act out a key decision or negotiation",
    benefit: "Encourages perspective-taking and empathy by putting students inside historical decisions",
    bands: MIDDLE_UP,
  },
  ActivityTemplate {
    name: "Concept Mind Map",
    kind: Mindmap,
    description: "Create a mind map connecting the causes, actors, and consequences of {topic}",
    benefit: "Makes relationships between concepts visible and supports synthesis across lesson segments",
    bands: MIDDLE_UP,
  },
  ActivityTemplate {
    name: "Guided WebQuest",
    kind: Webquest,
    description: "Complete a structured online inquiry gathering evidence about {topic} from curated sources",
    benefit: "Builds digital research habits and source evaluation skills within a safe, scoped task",
    bands: &[Middle, High, Advanced],
  },
  ActivityTemplate {
    name: "Map Annotation",
    kind: Map,
    description: "Annotate a map with the places, routes, and boundaries that shaped {topic}",
    benefit: "Grounds events in geography and trains students to read spatial relationships in history",
    bands: MIDDLE_UP,
  },
  ActivityTemplate {
    name: "Political Cartoon Analysis",
    kind: Cartoon,
    description: "Analyze period political cartoons about {topic}, decoding symbolism, audience, and point of view",
    benefit: "Sharpens visual literacy and teaches students to unpack bias and persuasion in sources",
    bands: HIGH_UP,
  },
  ActivityTemplate {
    name: "Independent Research Project",
    kind: Research,
    description: "Research an open question about {topic} and present findings with cited evidence",
    benefit: "Develops independent inquiry, sourcing, and argumentation skills expected in advanced coursework",
    bands: HIGH_UP,
  },
  ActivityTemplate {
    name: "Socratic Discussion",
    kind: Discussion,
    description: "Join a Socratic seminar interrogating the central tensions and legacies of {topic}",
    benefit: "Deepens critical thinking through structured dialogue and evidence-backed claims",
    bands: HIGH_UP,
  },
  ActivityTemplate {
    name: "Structured Debate",
    kind: Debate,
    description: "Debate an assigned position on a contested question arising from {topic}",
    benefit: "Trains students to build and rebut arguments using historical evidence under time pressure",
    bands: MIDDLE_UP,
  },
  ActivityTemplate {
    name: "Document-Based Question",
    kind: Dbq,
    description: "Write a document-based response using a packet of primary sources on {topic}",
    benefit: "Mirrors exam-style historical argumentation and close reading of primary evidence",
    bands: HIGH_UP,
  },
  ActivityTemplate {
    name: "Analytical Essay",
    kind: Essay,
    description: "Write an analytical essay evaluating continuity and change within {topic}",
    benefit: "Builds sustained written argumentation and command of periodization concepts",
    bands: HIGH_UP,
  },
  ActivityTemplate {
    name: "Museum Exhibit Presentation",
    kind: Presentation,
    description: "Curate and present a mini museum exhibit telling the story of {topic}",
    benefit: "Combines research, selection, and public speaking while giving students creative ownership",
    bands: MIDDLE_UP,
  },
  ActivityTemplate {
    name: "Historical Simulation",
    kind: Simulation,
    description: "Run a classroom simulation recreating a pivotal decision point of {topic}",
    benefit: "Shows how constraints and incomplete information shaped real historical choices",
    bands: HIGH_UP,
  },
];

/// Per-band allow-list of activity kinds. Distinct lists keep output
/// predictable: simple game-like formats for K-5, inquiry formats for 6-8,
/// analysis-heavy formats for 9-12 and above.
pub fn allowed_kinds(band: GradeBand) -> &'static [ActivityKind] {
  match band {
    GradeBand::Elementary => &[Timeline, Crossword, Memory, Matching, Storytelling, Coloring],
    GradeBand::Middle => &[Timeline, Mindmap, Webquest, Roleplay, Map, Wordsearch],
    GradeBand::High | GradeBand::Advanced | GradeBand::College => {
      &[Cartoon, Research, Discussion, Debate, Dbq, Essay, Presentation, Simulation, Journal]
    }
  }
}

/// Pre-authored resource entries for fallback lessons.
pub fn fallback_resources() -> Vec<Resource> {
  vec![
    Resource {
      title: "Library of Congress Teaching Materials".into(),
      url: "https://www.loc.gov/programs/teachers/".into(),
      kind: ResourceKind::Document,
      description: "Comprehensive collection of primary sources and teaching materials".into(),
    },
    Resource {
      title: "National Archives Education Resources".into(),
      url: "https://www.archives.gov/education".into(),
      kind: ResourceKind::Document,
      description: "Primary documents and lesson plans from the National Archives".into(),
    },
    Resource {
      title: "Internet History Sourcebooks Project".into(),
      url: "https://sourcebooks.fordham.edu/".into(),
      kind: ResourceKind::Article,
      description: "Curated public-domain primary source texts spanning world history".into(),
    },
  ]
}

/// Pre-authored primary source placeholder for fallback lessons.
pub fn fallback_primary_sources() -> Vec<PrimarySource> {
  vec![PrimarySource {
    title: "Historical Document Collection".into(),
    author: "Various".into(),
    date: "Historical period relevant to the standard".into(),
    excerpt: "Select an excerpt from the linked sourcebooks that matches the standard's period and region.".into(),
    context: "Pair the excerpt with guiding questions about author, audience, and purpose.".into(),
  }]
}

/// Pre-authored multimedia entries for fallback lessons.
pub fn fallback_multimedia() -> Vec<MultimediaResource> {
  vec![
    MultimediaResource {
      title: "Educational Video Resource".into(),
      url: "https://www.youtube.com/education".into(),
      kind: MultimediaKind::Video,
      description: "Educational videos related to the historical topic".into(),
    },
    MultimediaResource {
      title: "David Rumsey Historical Map Collection".into(),
      url: "https://www.davidrumsey.com/".into(),
      kind: MultimediaKind::Map,
      description: "High-resolution historical maps for geographic context".into(),
    },
  ]
}
