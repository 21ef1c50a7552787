//! The hand-authored portfolio content.
//!
//! Order inside each list is display order. Trailing whitespace, typos and the
//! duplicated experience blocks of earlier drafts were cleaned up here; the
//! renderer never normalizes content.

use crate::models::{
    Catalog, CertificationEntry, NavItem, Profile, ProjectEntry, SectionEntry, SocialKind,
    SocialLink,
};

const OWNER: &str = "Aryaman Singh";
const EMAIL: &str = "arsi9905@colorado.edu";

/// Builds the shipped catalog.
pub fn portfolio_catalog() -> Catalog {
    Catalog {
        profile: profile(),
        nav: nav_items(),
        socials: socials(),
        education: education(),
        experience: experience(),
        projects: projects(),
        certifications: certifications(),
    }
}

fn profile() -> Profile {
    Profile {
        name: OWNER.to_string(),
        greeting: format!("Hi, I am {OWNER}"),
        roles: strings(&[
            "Data Scientist",
            "Data Analyst",
            "Machine Learning Engineer",
            "Business Intelligence Analyst",
        ]),
        contact_blurb: "Currently open to new opportunities. Feel free to reach out!".to_string(),
        contact_email: EMAIL.to_string(),
    }
}

fn nav_items() -> Vec<NavItem> {
    ["about", "education", "experience", "projects", "contact"]
        .iter()
        .map(|id| NavItem {
            label: id.to_string(),
            anchor_id: id.to_string(),
        })
        .collect()
}

fn socials() -> Vec<SocialLink> {
    vec![
        SocialLink {
            kind: SocialKind::Github,
            href: "https://github.com/aryamansingh01".to_string(),
        },
        SocialLink {
            kind: SocialKind::Linkedin,
            href: "https://www.linkedin.com/in/aryaman-singh-21498620a/".to_string(),
        },
        SocialLink {
            kind: SocialKind::Mail,
            href: format!("mailto:{EMAIL}"),
        },
    ]
}

fn education() -> Vec<SectionEntry> {
    vec![
        SectionEntry {
            title: "Master of Science in Data Science".to_string(),
            subtitle: "University of Colorado, Boulder".to_string(),
            date_range: "2023 - 2025".to_string(),
            location: Some("Boulder, CO".to_string()),
            bullets: strings(&[
                "Specialization in Data Science and Machine Learning",
                "Relevant Coursework: Data Analysis, Database Management, Algorithms",
                "Hands-on Projects in ETL Pipelines and Data Visualization",
            ]),
        },
        SectionEntry {
            title: "Bachelor of Computer Applications".to_string(),
            subtitle: "BIT Mesra".to_string(),
            date_range: "2020 - 2023".to_string(),
            location: Some("Mesra, Jharkhand".to_string()),
            bullets: strings(&[
                "First Class with Distinction",
                "Relevant Coursework: Algorithms, Data Structures, Software Engineering",
                "Skills Gained: Python, SQL, Statistical Analysis",
            ]),
        },
    ]
}

fn experience() -> Vec<SectionEntry> {
    vec![
        SectionEntry {
            title: "Data Scientist Intern".to_string(),
            subtitle: "Hermes Infotech".to_string(),
            date_range: "January 2022 – July 2023".to_string(),
            location: Some("Remote".to_string()),
            bullets: strings(&[
                "Constructed time-series forecasting and classification models with scikit-learn, increasing operational efficiency by approximately 15% across multiple projects.",
                "Applied advanced statistical analyses to evaluate platform optimizations, projecting a 10% increase in user engagement.",
                "Implemented personalized recommendation engines, enhancing customer experience and driving higher conversion rates.",
                "Presented key findings to cross-functional teams, enabling data-driven strategies that improved ROI by 10%.",
            ]),
        },
        SectionEntry {
            title: "Data Analyst Intern".to_string(),
            subtitle: "Hermes Infotech".to_string(),
            date_range: "May 2022 – December 2022".to_string(),
            location: Some("Remote".to_string()),
            bullets: strings(&[
                "Aggregated and refined large e-commerce datasets using Python and SQL, resolving data irregularities and cutting manual data management by 20%.",
                "Designed interactive dashboards with Tableau and Power BI, streamlining real-time reporting and facilitating quicker decision-making for stakeholders.",
                "Executed A/B testing to pinpoint user engagement factors, steering product refinements and raising user satisfaction.",
            ]),
        },
        SectionEntry {
            title: "Data Analyst Intern".to_string(),
            subtitle: "NeoDocto".to_string(),
            date_range: "February 2022 – April 2022".to_string(),
            location: Some("Remote".to_string()),
            bullets: strings(&[
                "Managed full-cycle data analysis projects, using Python and SQL to successfully deliver insights supporting acquisition and retention strategy improvements",
                "Collaborated with product and marketing teams to deploy data-driven solutions, improving cross-team communication and project execution",
            ]),
        },
    ]
}

fn projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            title: "Customer Churn Prediction Using Apache Spark on Databricks".to_string(),
            description: "Developed and deployed a scalable data pipeline using Apache Spark on Databricks".to_string(),
            link: "https://github.com/aryamansingh01?tab=repositories".to_string(),
        },
        ProjectEntry {
            title: "House Price Prediction Using Machine Learning".to_string(),
            description: "Developed a predictive model using machine learning algorithms to estimate future house prices".to_string(),
            link: "https://github.com/aryamansingh01/A-B-Testing-Analysis-for-Measuring-E-Commerce-Website-Redesign-Effectiveness".to_string(),
        },
        ProjectEntry {
            title: "Globall-trade-analytics".to_string(),
            description: "Conducted comprehensive analysis of global trade data using R".to_string(),
            link: "https://github.com/aryamansingh01/Globall-trade-analytics-tableau".to_string(),
        },
        ProjectEntry {
            title: "Exploratory Data Analysis of Spotify Top Hits (2010-2022)".to_string(),
            description: "Analyzed Spotify’s top songs data from 2010 to 2022 to uncover trends in music popularity and listener preference".to_string(),
            link: "https://github.com/aryamansingh01?tab=repositories".to_string(),
        },
    ]
}

fn certifications() -> Vec<CertificationEntry> {
    let cert = |title: &str, organization: &str, date: &str, description: &str| {
        CertificationEntry {
            title: title.to_string(),
            organization: organization.to_string(),
            date: date.to_string(),
            description: description.to_string(),
            instructor: organization.to_string(),
        }
    };

    vec![
        cert(
            "Microsoft Certified PowerBI Data analyst Associate",
            "Microsoft",
            "October 2024",
            "Mastered interactive dashboards and data visualization in PowerBI, enhancing stakeholder insights",
        ),
        cert(
            "Snowpro Core Certified",
            "Snowflake",
            "December 2024",
            "Demonstrating proficiency in Snowflake platform design, development, and scalable data solutions.",
        ),
        cert(
            "Academy Accreditation - Databricks Lakehouse Fundamentals",
            "Databricks",
            "September 2024",
            "Completed with 95% proficiency in Lakehouse architecture, focusing on scalable data processing.",
        ),
        cert(
            "Academy Accreditation - Databricks Fundamentals",
            "Databricks",
            "September 2024",
            "Acquired strong skills in Databricks workflows, big data management, and collaborative analytics.",
        ),
        cert(
            "AWS cloud Practitioner Essentials",
            "AWS",
            "Aug 2022",
            "Achieved 98% understanding of AWS cloud services, security, and infrastructure.",
        ),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
