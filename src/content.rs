//! Static copy for the panels

use crate::components::icons::IconName;
use crate::types::FaqEntry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: IconName,
    pub title: &'static str,
    pub body: &'static str,
    pub bullets: &'static [&'static str],
    /// Terminal-style lines shown under the body
    pub readout: &'static [&'static str],
}

pub const BUYER_FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        icon: IconName::Search,
        title: "Strategic Search",
        body: "Identify assets that map to your agency's requirements. We scan the \"Ledger\" of verified SBIR awards to find technology that can be transitioned immediately via Phase III.",
        bullets: &[
            "+ AUTOMATED TECH MATCHING",
            "+ AGENCY MISSION ALIGNMENT",
            "+ 20-YEAR DATA RIGHTS CHECK",
        ],
        readout: &[],
    },
    FeatureCard {
        icon: IconName::Shield,
        title: "Forensic Verification",
        body: "Every transaction is backed by a forensic audit of the \"Chain of Custody\". We confirm the Assignor is the valid holder of title and that all \"Successor-in-Interest\" clauses are satisfied.",
        bullets: &[
            "+ IDENTITY GUARD PROTOCOLS",
            "+ LEGAL SUCCESSION AUDIT",
            "+ UEI & CAGE VALIDATION",
        ],
        readout: &[],
    },
    FeatureCard {
        icon: IconName::GitBranch,
        title: "Phase III Transition",
        body: "Acquired rights carry the SBIR lineage with them. Award sole source Phase III work against the transferred topic without a new competition.",
        bullets: &[
            "+ LINEAGE DOCUMENTATION",
            "+ J&A-FREE SOLE SOURCE PATH",
            "+ CONTRACTING OFFICER BRIEF",
        ],
        readout: &[],
    },
];

pub const ASSET_RESCUE: FeatureCard = FeatureCard {
    icon: IconName::Activity,
    title: "Trojan Horse Asset Rescue",
    body: "Do you hold dormant SBIR assets? We identify large Prime contractors facing \"Revenue Cliffs\" (expiring contracts, protests) who need your Sole Source authority to bridge the gap. Turn your IP into immediate liquidity.",
    bullets: &[],
    readout: &[
        "> DETECTING REVENUE CLIFFS...",
        "> MATCHING: [YOUR_ASSET] -> [PRIME_CONTRACT_RISK]",
        "> STATUS: MATCH FOUND (95% CONFIDENCE)",
    ],
};

pub const LIQUIDITY_TYPES: [&str; 3] = [
    "Asset Sale (Simple Assignment)",
    "Royalty Stream",
    "Strategic Alliance",
];

pub const FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "What are SBIR data rights?",
        answer: "Technical data and software generated under an SBIR award are protected from disclosure outside the government for a fixed period. During that period the awardee, and anyone holding the rights after it, is the only party the government can turn to for follow-on work on that technology.",
        citations: &["15 U.S.C. § 638(j)", "DFARS 252.227-7018", "SBIR/STTR Policy Directive § 8"],
    },
    FaqEntry {
        question: "Can SBIR data rights be transferred to another company?",
        answer: "Yes. A company that acquires the technology, for example through an asset purchase or assignment, can stand in the original awardee's place as its successor-in-interest. Documenting that chain of title is what makes the transfer usable by a contracting officer.",
        citations: &["SBIR/STTR Policy Directive § 4(c)", "FAR 42.1204"],
    },
    FaqEntry {
        question: "What is a Phase III award and why does it matter?",
        answer: "Phase III is work that derives from, extends or completes earlier SBIR efforts. It can be awarded sole source without further competition, which lets an agency move from requirement to contract in weeks instead of months.",
        citations: &["15 U.S.C. § 638(r)(4)", "SBIR/STTR Policy Directive § 4(c)(2)"],
    },
    FaqEntry {
        question: "How long does SBIR data rights protection last?",
        answer: "Awards made under the 2019 Policy Directive carry a 20-year protection period that does not restart with later awards. Older awards follow the rules in effect when they were made, so every asset we list is checked against its award date.",
        citations: &["SBIR/STTR Policy Directive § 8(b)(4) (2019)", "DFARS 252.227-7018(b)(4)"],
    },
];
