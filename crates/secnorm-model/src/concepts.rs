//! The Tier-1 concept set (spec §6): the curated subset of XBRL concepts
//! that get materialized as RAG sentences.

/// Entity shares/float (DEI taxonomy) plus canonical balance-sheet,
/// income-statement, and cash-flow line items.
pub const TIER1_CONCEPTS: &[&str] = &[
    "EntityCommonStockSharesOutstanding",
    "EntityPublicFloat",
    "Assets",
    "AssetsCurrent",
    "Liabilities",
    "LiabilitiesCurrent",
    "LiabilitiesAndStockholdersEquity",
    "StockholdersEquity",
    "RetainedEarningsAccumulatedDeficit",
    "CashAndCashEquivalentsAtCarryingValue",
    "PropertyPlantAndEquipmentNet",
    "Revenues",
    "RevenueFromContractWithCustomerExcludingAssessedTax",
    "CostOfRevenue",
    "CostOfGoodsAndServicesSold",
    "GrossProfit",
    "OperatingIncomeLoss",
    "NetIncomeLoss",
    "IncomeTaxExpenseBenefit",
    "EarningsPerShareBasic",
    "EarningsPerShareDiluted",
    "NetCashProvidedByUsedInOperatingActivities",
    "NetCashProvidedByUsedInInvestingActivities",
    "NetCashProvidedByUsedInFinancingActivities",
    "WeightedAverageNumberOfSharesOutstandingBasic",
    "WeightedAverageNumberOfSharesOutstandingDiluted",
    "CommonStockSharesOutstanding",
];

/// Returns true if `concept` is in the Tier-1 set.
pub fn is_tier1(concept: &str) -> bool {
    TIER1_CONCEPTS.contains(&concept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_tier1_concept() {
        assert!(is_tier1("Assets"));
        assert!(is_tier1("EarningsPerShareDiluted"));
    }

    #[test]
    fn rejects_non_tier1_concept() {
        assert!(!is_tier1("AccruedLiabilitiesCurrent"));
        assert!(!is_tier1(""));
    }

    #[test]
    fn set_has_no_duplicates() {
        let mut sorted = TIER1_CONCEPTS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), TIER1_CONCEPTS.len());
    }
}
