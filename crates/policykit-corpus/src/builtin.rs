//! The shipped education AI-policy catalog.
//!
//! Keep ids stable: selections, templates, and stored reports refer to them.

use policykit_types::{
    Audience, ClauseMetadata, PolicyClause, PolicyTemplate, RiskLevel, ToolUseMode,
};

pub(crate) const CATALOG_VERSION: &str = "2026.10";

use Audience::{HigherEd, K12};
use ToolUseMode::{Encouraged, Permitted, Prohibited, Restricted};

struct Draft(PolicyClause);

fn clause(id: &str, title: &str, risk: RiskLevel, body: &str) -> Draft {
    Draft(PolicyClause {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        tags: Vec::new(),
        risk_level: risk,
        audience: None,
        jurisdictions: None,
        tool_use_modes: None,
        dependencies: Vec::new(),
        conflicts: Vec::new(),
        metadata: ClauseMetadata {
            version: "1.0".to_string(),
            references: Vec::new(),
        },
    })
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Draft {
    fn tags(mut self, tags: &[&str]) -> Self {
        self.0.tags = strings(tags);
        self
    }

    fn audience(mut self, audience: &[Audience]) -> Self {
        self.0.audience = Some(audience.to_vec());
        self
    }

    fn jurisdictions(mut self, codes: &[&str]) -> Self {
        self.0.jurisdictions = Some(strings(codes));
        self
    }

    fn modes(mut self, modes: &[ToolUseMode]) -> Self {
        self.0.tool_use_modes = Some(modes.to_vec());
        self
    }

    fn depends_on(mut self, ids: &[&str]) -> Self {
        self.0.dependencies = strings(ids);
        self
    }

    fn conflicts_with(mut self, ids: &[&str]) -> Self {
        self.0.conflicts = strings(ids);
        self
    }

    fn references(mut self, refs: &[&str]) -> Self {
        self.0.metadata.references = strings(refs);
        self
    }

    fn build(self) -> PolicyClause {
        self.0
    }
}

pub(crate) fn catalog() -> (Vec<PolicyClause>, Vec<PolicyTemplate>) {
    (clauses(), templates())
}

fn clauses() -> Vec<PolicyClause> {
    use RiskLevel::{Critical, High, Low, Medium};

    vec![
        clause(
            "purpose-and-scope",
            "Purpose and Scope",
            Low,
            "This policy governs the use of artificial intelligence tools by students, \
             instructors, and staff. It applies to all instructional, administrative, and \
             research activities conducted on behalf of the institution.",
        )
        .tags(&["governance", "scope"])
        .build(),
        clause(
            "definitions",
            "Definitions",
            Low,
            "\"AI tool\" means any software that generates text, images, code, or other content \
             in response to prompts. \"Student data\" means any information that is directly \
             related to an identifiable student and maintained by the institution.",
        )
        .tags(&["governance", "definitions"])
        .build(),
        clause(
            "student-data-privacy",
            "Student Data Privacy",
            High,
            "Personally identifiable student information must not be entered into an AI tool \
             unless the tool has been approved for that data classification. Staff must use the \
             minimum data necessary for the task and remove identifiers whenever possible.",
        )
        .tags(&["privacy", "data", "student-records"])
        .depends_on(&["data-security"])
        .build(),
        clause(
            "data-security",
            "Data Security Safeguards",
            High,
            "Approved AI tools must encrypt data in transit and at rest, support account-level \
             access controls, and provide audit logs on request. Credentials for AI services \
             must never be shared between users.",
        )
        .tags(&["security", "data"])
        .build(),
        clause(
            "coppa-compliance",
            "Children's Online Privacy (COPPA)",
            Critical,
            "For students under 13, AI tools may be used only where the operator complies with \
             the Children's Online Privacy Protection Act and the school has obtained any \
             required consent. Tools that collect personal information from children for \
             commercial purposes are prohibited.",
        )
        .tags(&["privacy", "coppa", "children"])
        .audience(&[K12])
        .jurisdictions(&["US"])
        .depends_on(&["student-data-privacy", "parental-consent"])
        .references(&["15 U.S.C. 6501-6506", "16 CFR Part 312"])
        .build(),
        clause(
            "parental-consent",
            "Parental Notice and Consent",
            Critical,
            "Parents and guardians must receive notice of the AI tools used in instruction, the \
             categories of data those tools process, and how to opt their child out. Consent is \
             obtained before any tool that processes student personal information is used.",
        )
        .tags(&["consent", "children", "privacy", "coppa"])
        .audience(&[K12])
        .build(),
        clause(
            "ferpa-compliance",
            "Education Records (FERPA)",
            Critical,
            "Education records and personally identifiable information derived from them may be \
             disclosed to an AI service provider only under the school-official exception, with \
             direct control over the use and maintenance of the records.",
        )
        .tags(&["privacy", "ferpa", "student-records"])
        .audience(&[K12, HigherEd])
        .jurisdictions(&["US"])
        .depends_on(&["student-data-privacy"])
        .references(&["20 U.S.C. 1232g", "34 CFR Part 99"])
        .build(),
        clause(
            "gdpr-compliance",
            "International Data Protection (GDPR)",
            Critical,
            "Processing of personal data of individuals in the European Economic Area through AI \
             tools requires a documented lawful basis, a data processing agreement with the \
             provider, and a transfer mechanism for any data leaving the EEA.",
        )
        .tags(&["privacy", "gdpr", "international"])
        .audience(&[HigherEd])
        .jurisdictions(&["EU"])
        .depends_on(&["student-data-privacy"])
        .references(&["Regulation (EU) 2016/679"])
        .build(),
        clause(
            "california-sopipa",
            "California Student Online Privacy (SOPIPA)",
            High,
            "AI tool operators serving California K-12 students may not use student information \
             for targeted advertising, build profiles for non-educational purposes, or sell \
             student data.",
        )
        .tags(&["privacy", "state-law"])
        .audience(&[K12])
        .jurisdictions(&["US", "CA"])
        .depends_on(&["student-data-privacy", "vendor-vetting"])
        .references(&["Cal. Bus. & Prof. Code 22584"])
        .build(),
        clause(
            "illinois-soppa",
            "Illinois Student Online Personal Protection (SOPPA)",
            High,
            "The district publishes a list of AI tool operators with written data agreements and \
             notifies parents of any breach of covered information within the statutory window.",
        )
        .tags(&["privacy", "state-law"])
        .audience(&[K12])
        .jurisdictions(&["US", "IL"])
        .depends_on(&["vendor-vetting"])
        .references(&["105 ILCS 85"])
        .build(),
        clause(
            "new-york-ed-law-2d",
            "New York Education Law 2-d",
            High,
            "Contracts with AI tool providers include the parents' bill of rights for data privacy \
             and security and a data security and privacy plan aligned with the NIST \
             Cybersecurity Framework.",
        )
        .tags(&["privacy", "state-law", "security"])
        .audience(&[K12])
        .jurisdictions(&["US", "NY"])
        .depends_on(&["data-security"])
        .references(&["N.Y. Educ. Law 2-d", "8 NYCRR Part 121"])
        .build(),
        clause(
            "ai-use-prohibited",
            "Prohibition on Generative AI Use",
            High,
            "Students may not use generative AI tools to complete, draft, or revise any graded \
             work. Instructors may not use generative AI tools to evaluate student work.",
        )
        .tags(&["ai-use", "restriction"])
        .modes(&[Prohibited])
        .depends_on(&["academic-integrity"])
        .conflicts_with(&["ai-use-restricted", "ai-use-permitted", "ai-use-encouraged"])
        .build(),
        clause(
            "ai-use-restricted",
            "Restricted AI Use with Approval",
            Medium,
            "AI tools may be used only for activities an instructor has explicitly approved in \
             writing. Unapproved use is treated as unauthorized assistance.",
        )
        .tags(&["ai-use", "approval"])
        .modes(&[Restricted])
        .depends_on(&["ai-disclosure"])
        .conflicts_with(&["ai-use-prohibited", "ai-use-encouraged"])
        .build(),
        clause(
            "ai-use-permitted",
            "Permitted AI Use",
            Medium,
            "AI tools may be used to support learning, including brainstorming, feedback, and \
             study, unless an instructor restricts use for a specific assignment.",
        )
        .tags(&["ai-use", "instruction"])
        .modes(&[Permitted])
        .depends_on(&["ai-disclosure"])
        .conflicts_with(&["ai-use-prohibited"])
        .build(),
        clause(
            "ai-use-encouraged",
            "Encouraged AI Exploration",
            Low,
            "The institution encourages responsible experimentation with AI tools in teaching, \
             learning, and operations, and provides approved tools to all members of the \
             community.",
        )
        .tags(&["ai-use", "innovation"])
        .modes(&[Encouraged])
        .depends_on(&["ai-literacy"])
        .conflicts_with(&["ai-use-prohibited", "ai-use-restricted"])
        .build(),
        clause(
            "academic-integrity",
            "Academic Integrity",
            High,
            "Submitting AI-generated work as one's own without authorization violates the \
             academic integrity code. Suspected violations follow the existing integrity review \
             process; AI detection tool output alone is not sufficient evidence.",
        )
        .tags(&["integrity", "assessment"])
        .build(),
        clause(
            "ai-disclosure",
            "Disclosure and Citation of AI Assistance",
            Medium,
            "Any permitted use of AI assistance in submitted work must be disclosed, including \
             the tool used and how its output was incorporated.",
        )
        .tags(&["transparency", "integrity", "citation"])
        .modes(&[Restricted, Permitted, Encouraged])
        .depends_on(&["academic-integrity"])
        .build(),
        clause(
            "ai-literacy",
            "AI Literacy",
            Low,
            "Curriculum includes instruction on how AI tools work, their limitations, bias, and \
             appropriate verification of generated content.",
        )
        .tags(&["training", "literacy", "instruction"])
        .modes(&[Permitted, Encouraged])
        .build(),
        clause(
            "vendor-vetting",
            "AI Vendor Vetting",
            High,
            "Before adoption, each AI tool is reviewed for data practices, security controls, \
             accessibility, and contractual terms. Only tools on the approved list may process \
             institutional data.",
        )
        .tags(&["procurement", "vendor", "privacy"])
        .depends_on(&["student-data-privacy"])
        .build(),
        clause(
            "classroom-guidelines",
            "Classroom Use Guidelines",
            Medium,
            "Teachers communicate the AI expectations for each assignment using the district's \
             standard labels and supervise student use of AI tools during class.",
        )
        .tags(&["instruction", "classroom"])
        .audience(&[K12])
        .modes(&[Restricted, Permitted, Encouraged])
        .build(),
        clause(
            "age-appropriate-use",
            "Age-Appropriate Use",
            High,
            "AI tools are used with students only when the provider's terms permit use at the \
             student's age and the tool includes content safeguards suitable for minors.",
        )
        .tags(&["children", "safety", "instruction"])
        .audience(&[K12])
        .build(),
        clause(
            "research-ethics",
            "Research Ethics and AI",
            Medium,
            "Use of AI tools in human-subjects research must be described in the protocol \
             submitted to the institutional review board, including how participant data is \
             protected.",
        )
        .tags(&["research", "ethics", "irb"])
        .audience(&[HigherEd])
        .build(),
        clause(
            "faculty-discretion",
            "Faculty Discretion",
            Low,
            "Faculty set course-level AI expectations in the syllabus. Where the syllabus is \
             silent, the institutional default applies.",
        )
        .tags(&["instruction", "faculty", "syllabus"])
        .audience(&[HigherEd])
        .modes(&[Permitted, Encouraged])
        .depends_on(&["ai-disclosure"])
        .build(),
        clause(
            "staff-training",
            "Staff Training",
            Low,
            "Staff who use AI tools in their role complete annual training on this policy, data \
             handling, and recognizing inaccurate or biased output.",
        )
        .tags(&["training", "professional-development"])
        .build(),
        clause(
            "accessibility-equity",
            "Accessibility and Equity",
            Medium,
            "Required AI tools must be accessible to students with disabilities and available at \
             no cost, so that no student is disadvantaged by lack of access.",
        )
        .tags(&["equity", "accessibility"])
        .build(),
        clause(
            "incident-response",
            "AI Incident Response",
            High,
            "Suspected exposure of institutional data through an AI tool is reported to the \
             information security office within 24 hours and handled under the incident response \
             plan.",
        )
        .tags(&["security", "incident"])
        .depends_on(&["data-security"])
        .build(),
        clause(
            "enforcement",
            "Enforcement",
            Medium,
            "Violations of this policy are addressed through the applicable student conduct code \
             or employee disciplinary procedures.",
        )
        .tags(&["enforcement", "governance"])
        .depends_on(&["academic-integrity"])
        .build(),
        clause(
            "policy-review",
            "Policy Review",
            Low,
            "This policy is reviewed at least annually by the governing committee and updated as \
             AI capabilities, law, and institutional practice change.",
        )
        .tags(&["governance", "review"])
        .build(),
    ]
}

fn template(
    id: &str,
    name: &str,
    description: &str,
    audience: Option<&[Audience]>,
    jurisdictions: Option<&[&str]>,
    clause_ids: &[&str],
) -> PolicyTemplate {
    PolicyTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        audience: audience.map(|a| a.to_vec()),
        jurisdictions: jurisdictions.map(strings),
        clause_ids: strings(clause_ids),
    }
}

fn templates() -> Vec<PolicyTemplate> {
    vec![
        template(
            "k12-comprehensive",
            "K-12 Artificial Intelligence Use Policy",
            "District-wide policy covering instruction, privacy, and vendor management.",
            Some(&[K12]),
            Some(&["US"]),
            &[
                "purpose-and-scope",
                "definitions",
                "ai-use-prohibited",
                "ai-use-restricted",
                "ai-use-permitted",
                "ai-use-encouraged",
                "classroom-guidelines",
                "age-appropriate-use",
                "academic-integrity",
                "ai-disclosure",
                "ai-literacy",
                "student-data-privacy",
                "coppa-compliance",
                "parental-consent",
                "ferpa-compliance",
                "california-sopipa",
                "illinois-soppa",
                "new-york-ed-law-2d",
                "vendor-vetting",
                "data-security",
                "incident-response",
                "staff-training",
                "accessibility-equity",
                "enforcement",
                "policy-review",
            ],
        ),
        template(
            "k12-restrictive",
            "K-12 AI Restriction Policy",
            "Minimal policy for districts that prohibit generative AI in coursework.",
            Some(&[K12]),
            Some(&["US"]),
            &[
                "purpose-and-scope",
                "definitions",
                "ai-use-prohibited",
                "academic-integrity",
                "student-data-privacy",
                "coppa-compliance",
                "parental-consent",
                "ferpa-compliance",
                "data-security",
                "enforcement",
            ],
        ),
        template(
            "highered-comprehensive",
            "Institutional Generative AI Policy",
            "Campus policy for teaching, learning, research, and administration.",
            Some(&[HigherEd]),
            None,
            &[
                "purpose-and-scope",
                "definitions",
                "ai-use-prohibited",
                "ai-use-restricted",
                "ai-use-permitted",
                "ai-use-encouraged",
                "faculty-discretion",
                "academic-integrity",
                "ai-disclosure",
                "ai-literacy",
                "research-ethics",
                "student-data-privacy",
                "ferpa-compliance",
                "gdpr-compliance",
                "vendor-vetting",
                "data-security",
                "incident-response",
                "staff-training",
                "accessibility-equity",
                "enforcement",
                "policy-review",
            ],
        ),
        template(
            "highered-research",
            "Research Use of AI Guidelines",
            "Guidance for investigators using AI tools in sponsored and human-subjects research.",
            Some(&[HigherEd]),
            None,
            &[
                "purpose-and-scope",
                "research-ethics",
                "student-data-privacy",
                "gdpr-compliance",
                "data-security",
                "incident-response",
                "policy-review",
            ],
        ),
    ]
}
