use std::path::PathBuf;

use crate::dto::kpr_dto::{KprProgramPage, KprProgramSummary, KprSection};
use crate::error::{Error, Result};

struct Program {
    slug: &'static str,
    title: &'static str,
    summary: &'static str,
    sections: &'static [(&'static str, &'static str)],
    document: &'static str,
}

const PROGRAMS: &[Program] = &[
    Program {
        slug: "overview",
        title: "KPR Program Overview",
        summary: "What the KPR scholarship program funds and who runs it.",
        sections: &[
            (
                "About the program",
                "KPR pairs community sponsors with students who need help covering tuition, books and living costs.",
            ),
            (
                "Funding cycle",
                "Awards are announced once per academic year and paid per semester.",
            ),
        ],
        document: "kpr-overview.pdf",
    },
    Program {
        slug: "eligibility",
        title: "Eligibility and Selection",
        summary: "Requirements applicants must meet and how awards are decided.",
        sections: &[
            (
                "Who can apply",
                "Students enrolled or admitted at an accredited institution for the coming academic year.",
            ),
            (
                "Selection",
                "A review panel scores academic record, financial need and community involvement.",
            ),
        ],
        document: "kpr-eligibility.pdf",
    },
    Program {
        slug: "application-guide",
        title: "Application Guide",
        summary: "Step by step instructions for preparing a complete application.",
        sections: &[
            (
                "Documents",
                "Transcript, one recommendation letter and a personal statement of up to 800 words.",
            ),
            (
                "Submitting",
                "Fill in the application form PDF and send it before the listed deadline.",
            ),
        ],
        document: "kpr-application-guide.pdf",
    },
];

#[derive(Clone)]
pub struct KprService {
    documents_dir: PathBuf,
}

impl KprService {
    pub fn new(documents_dir: impl Into<PathBuf>) -> Self {
        Self {
            documents_dir: documents_dir.into(),
        }
    }

    pub fn list(&self) -> Vec<KprProgramSummary> {
        PROGRAMS
            .iter()
            .map(|p| KprProgramSummary {
                slug: p.slug.to_string(),
                title: p.title.to_string(),
                summary: p.summary.to_string(),
                document_url: document_url(p.slug),
            })
            .collect()
    }

    pub fn page(&self, slug: &str) -> Result<KprProgramPage> {
        let program = find(slug)?;
        Ok(KprProgramPage {
            slug: program.slug.to_string(),
            title: program.title.to_string(),
            summary: program.summary.to_string(),
            sections: program
                .sections
                .iter()
                .map(|(heading, body)| KprSection {
                    heading: heading.to_string(),
                    body: body.to_string(),
                })
                .collect(),
            document_url: document_url(program.slug),
        })
    }

    /// Location of the PDF for `slug` and the file name to offer the browser.
    /// Paths come from the catalog only.
    pub fn document(&self, slug: &str) -> Result<(PathBuf, &'static str)> {
        let program = find(slug)?;
        Ok((self.documents_dir.join(program.document), program.document))
    }
}

fn find(slug: &str) -> Result<&'static Program> {
    PROGRAMS
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| Error::NotFound(format!("KPR page '{}' not found", slug)))
}

fn document_url(slug: &str) -> String {
    format!("/api/kpr/programs/{}/document", slug)
}
