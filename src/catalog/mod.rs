//! Fallback catalog: sample content served while a collection is still empty.
//!
//! Records are built fresh on every call with new ids and are never persisted.

use serde_json::{Map, Value};

use crate::models::{new_id, CaseStudy, Resource, Service, TeamMember, Testimonial};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn metrics(pairs: &[(&str, &str)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), Value::from(*value)))
        .collect()
}

fn testimonial(name: &str, role: &str, company: &str, content: &str) -> Testimonial {
    Testimonial {
        id: new_id(),
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        content: content.to_string(),
        avatar_url: None,
        rating: 5,
    }
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "Dr. Sarah Chen",
            "VP Regulatory Affairs",
            "BioGenix Therapeutics",
            "Maglinc cut our FDA submission timeline by 40%. Their expertise in regulatory strategy is unmatched. We launched 3 months ahead of schedule.",
        ),
        testimonial(
            "Marcus Williams",
            "Chief Scientific Officer",
            "PharmaTech Solutions",
            "The team's deep regulatory knowledge and proactive approach saved us from costly compliance issues. Best consulting investment we've made.",
        ),
        testimonial(
            "Dr. Amelia Rodriguez",
            "Director of Quality",
            "MedLife Innovations",
            "Working with Maglinc felt like having an extension of our own team. Their documentation expertise is exceptional.",
        ),
    ]
}

pub fn case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            id: new_id(),
            title: "Accelerated FDA Approval for Novel Oncology Drug".to_string(),
            client: "Global Pharma Leader".to_string(),
            challenge: "Complex multi-indication approval process with tight deadlines and evolving regulatory landscape.".to_string(),
            solution: "Implemented strategic regulatory pathway optimization and parallel processing approach.".to_string(),
            results: strings(&[
                "Reduced approval timeline by 5 months",
                "Zero major deficiencies in FDA review",
                "Successful simultaneous EU submission",
            ]),
            metrics: metrics(&[
                ("time_saved", "5 months"),
                ("cost_savings", "$12M"),
                ("success_rate", "100%"),
            ]),
            image_url: Some(
                "https://images.unsplash.com/photo-1587567818566-3272be7d64c9?w=800".to_string(),
            ),
        },
        CaseStudy {
            id: new_id(),
            title: "Quality System Remediation & Compliance".to_string(),
            client: "Mid-Size Biotech".to_string(),
            challenge: "FDA warning letter requiring comprehensive quality system overhaul.".to_string(),
            solution: "Rapid assessment, gap analysis, and implementation of robust quality management system.".to_string(),
            results: strings(&[
                "Warning letter lifted in 6 months",
                "Passed re-inspection with zero 483 observations",
                "Established sustainable compliance framework",
            ]),
            metrics: metrics(&[
                ("time_to_resolution", "6 months"),
                ("observations", "0"),
                ("compliance_score", "98%"),
            ]),
            image_url: Some(
                "https://images.unsplash.com/photo-1716840646010-e5622fd6683d?w=800".to_string(),
            ),
        },
    ]
}

fn member(name: &str, role: &str, bio: &str, expertise: &[&str], avatar_url: &str) -> TeamMember {
    TeamMember {
        id: new_id(),
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
        linkedin_url: None,
        avatar_url: Some(avatar_url.to_string()),
        expertise: strings(expertise),
    }
}

pub fn team() -> Vec<TeamMember> {
    vec![
        member(
            "Dr. Jennifer Martinez",
            "Founder & Chief Regulatory Officer",
            "Former FDA reviewer with 15+ years in pharmaceutical regulation. Led 200+ successful drug approvals.",
            &["FDA Strategy", "CMC Review", "IND/NDA Submissions"],
            "https://images.unsplash.com/photo-1758691461916-dc7894eb8f94?w=400",
        ),
        member(
            "Robert Chen, PhD",
            "VP Quality & Compliance",
            "Quality systems expert with Big Pharma and biotech experience. Specializes in remediation and inspection readiness.",
            &["Quality Systems", "GMP Compliance", "Inspection Management"],
            "https://images.unsplash.com/photo-1758691463198-dc663b8a64e4?w=400",
        ),
        member(
            "Dr. Priya Sharma",
            "Director of Regulatory Writing",
            "Medical writer and regulatory affairs specialist. Authored regulatory documents for 50+ global submissions.",
            &["Medical Writing", "Regulatory Documentation", "Global Submissions"],
            "https://images.unsplash.com/photo-1758691462119-792279713969?w=400",
        ),
    ]
}

fn service(title: &str, description: &str, icon: &str, features: &[&str], snippet: &str) -> Service {
    Service {
        id: new_id(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        features: strings(features),
        case_study_snippet: Some(snippet.to_string()),
    }
}

pub fn services() -> Vec<Service> {
    vec![
        service(
            "Regulatory Strategy & Planning",
            "Navigate complex regulatory pathways with confidence. We design optimal strategies for global market access.",
            "map-pin",
            &[
                "Regulatory pathway assessment",
                "Meeting preparation (FDA, EMA, PMDA)",
                "Risk mitigation strategies",
                "Global harmonization planning",
            ],
            "Helped biotech company achieve FDA breakthrough designation",
        ),
        service(
            "Regulatory Documentation",
            "Expert preparation of submission-ready regulatory documents that meet global standards.",
            "file-text",
            &[
                "IND/NDA/BLA preparation",
                "CTD/eCTD compilation",
                "Investigator brochures",
                "Pediatric study plans",
            ],
            "Created complete NDA package in 4 months vs. industry average of 8",
        ),
        service(
            "Quality & Compliance",
            "Build robust quality systems that pass inspections and ensure sustainable compliance.",
            "shield-check",
            &[
                "Quality system design & remediation",
                "GMP/GCP compliance audits",
                "Inspection readiness",
                "CAPA effectiveness review",
            ],
            "Zero FDA 483 observations in last 15 client inspections",
        ),
        service(
            "Medical & Scientific Writing",
            "Clear, compelling regulatory narratives that accelerate review and approval.",
            "pen-tool",
            &[
                "Clinical study reports",
                "Regulatory responses",
                "Scientific publications",
                "Patient-facing materials",
            ],
            "Drafted responses that resolved FDA complete response letter",
        ),
        service(
            "Risk Management",
            "Proactive identification and mitigation of regulatory and quality risks.",
            "alert-triangle",
            &[
                "Risk assessments (ICH Q9)",
                "Gap analysis",
                "Deviation investigation",
                "Change control evaluation",
            ],
            "Prevented costly product recall through early risk identification",
        ),
        service(
            "Administrative Support",
            "Streamline your compliance operations with expert administrative assistance.",
            "folder",
            &[
                "Document management",
                "Submission tracking",
                "Regulatory intelligence",
                "Process optimization",
            ],
            "Reduced administrative burden by 60% for mid-size pharma",
        ),
    ]
}

fn faq(title: &str, content: &str) -> Resource {
    Resource {
        id: new_id(),
        title: title.to_string(),
        kind: "faq".to_string(),
        content: content.to_string(),
        file_url: None,
        thumbnail_url: None,
    }
}

pub fn resources() -> Vec<Resource> {
    vec![
        faq(
            "What is the typical timeline for FDA approval?",
            "Standard FDA review timelines are 10 months (priority) to 12 months (standard) for NDAs. With strategic planning and proactive communication, we help clients accelerate these timelines by 30-40%.",
        ),
        faq(
            "How do you charge for consulting services?",
            "We offer flexible engagement models: project-based, retainer, or hourly. Pricing depends on scope and complexity. Most clients start with a complimentary strategy session to scope needs and provide a transparent quote.",
        ),
        faq(
            "Can you help with global submissions?",
            "Absolutely. Our team has experience with FDA, EMA, PMDA, Health Canada, and other global regulatory authorities. We specialize in harmonized global development strategies.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Schema;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(testimonials().len(), 3);
        assert_eq!(case_studies().len(), 2);
        assert_eq!(team().len(), 3);
        assert_eq!(services().len(), 6);
        assert_eq!(resources().len(), 3);
    }

    #[test]
    fn test_ids_are_fresh_per_call() {
        let first: HashSet<String> = services().into_iter().map(|s| s.id).collect();
        let second: HashSet<String> = services().into_iter().map(|s| s.id).collect();
        assert_eq!(first.len(), 6);
        assert!(first.is_disjoint(&second));
    }

    #[test]
    fn test_content_is_stable_across_calls() {
        let strip = |mut s: Service| {
            s.id.clear();
            s
        };
        let first: Vec<Service> = services().into_iter().map(strip).collect();
        let second: Vec<Service> = services().into_iter().map(strip).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_case_study_metrics_are_populated() {
        let studies = case_studies();
        assert_eq!(studies[0].metrics.len(), 3);
        assert_eq!(studies[0].metrics["cost_savings"], "$12M");
        assert_eq!(studies[1].metrics["compliance_score"], "98%");
    }

    #[test]
    fn test_records_pass_their_own_schema() {
        for record in case_studies() {
            let raw = serde_json::to_value(&record).unwrap();
            assert_eq!(CaseStudy::from_document(raw).unwrap(), record);
        }
        for record in resources() {
            let raw = serde_json::to_value(&record).unwrap();
            assert_eq!(raw["type"], "faq");
            assert_eq!(Resource::from_document(raw).unwrap(), record);
        }
    }
}
