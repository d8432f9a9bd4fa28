//! Canned explanations for follow-up questions after the quiz.
//!
//! Matching is plain substring search on the lowercased question. Topics are
//! tried in a fixed order and the first one with a keyword hit wins, so a
//! question that mentions both "rent" and "rate" is answered as housing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Housing,
    Apr,
    Investing,
    GeneralFinance,
    Menu,
}

const TOPIC_KEYWORDS: [(Topic, &[&str]); 4] = [
    (Topic::Housing, &["30%", "rent", "budget", "housing", "rule"]),
    (Topic::Apr, &["apr", "interest", "rate", "annual percentage"]),
    (
        Topic::Investing,
        &["stock", "invest", "investment", "diversification", "portfolio"],
    ),
    (
        Topic::GeneralFinance,
        &["save", "saving", "money", "financial", "finance"],
    ),
];

impl Topic {
    pub fn classify(question: &str) -> Topic {
        let question = question.to_lowercase();
        TOPIC_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| question.contains(k)))
            .map(|(topic, _)| *topic)
            .unwrap_or(Topic::Menu)
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Topic::Housing => HOUSING_EXPLANATION,
            Topic::Apr => APR_EXPLANATION,
            Topic::Investing => INVESTING_EXPLANATION,
            Topic::GeneralFinance => GENERAL_EXPLANATION,
            Topic::Menu => MENU_EXPLANATION,
        }
    }
}

pub fn respond(question: &str) -> &'static str {
    let topic = Topic::classify(question);
    log::debug!("Assistant topic for {:?}: {:?}", question, topic);
    topic.explanation()
}

/// Shortcut buttons shown under the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickQuestion {
    ThirtyPercentRule,
    WhatIsApr,
    StockBasics,
}

impl QuickQuestion {
    pub const ALL: [QuickQuestion; 3] = [
        QuickQuestion::ThirtyPercentRule,
        QuickQuestion::WhatIsApr,
        QuickQuestion::StockBasics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickQuestion::ThirtyPercentRule => "Explain 30% Rule",
            QuickQuestion::WhatIsApr => "What is APR?",
            QuickQuestion::StockBasics => "Stock Investing Basics",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            QuickQuestion::ThirtyPercentRule => "Explain the 30% rule for rent",
            QuickQuestion::WhatIsApr => "What is APR?",
            QuickQuestion::StockBasics => "Explain stock investing basics",
        }
    }

    pub fn from_label(label: &str) -> Option<QuickQuestion> {
        Self::ALL.into_iter().find(|q| q.label() == label)
    }
}

const HOUSING_EXPLANATION: &str = "🏠 <b>The 30% Rule for Housing Costs</b>

The 30% rule is a widely recommended guideline that suggests you should spend no more than 30% of your gross monthly income on housing costs (rent or mortgage payments).

<b>Why this matters:</b>
• <b>Financial Stability</b>: Keeps housing affordable relative to your income
• <b>Emergency Fund</b>: Leaves room for savings and unexpected expenses
• <b>Other Expenses</b>: Ensures you can cover food, transportation, healthcare, and other necessities
• <b>Debt Management</b>: Prevents overextending yourself financially

<b>Example:</b>
If you earn $3,000/month, your housing costs should be $900 or less.

<b>Pro tip:</b> This includes rent/mortgage, utilities, insurance, and property taxes. Some experts suggest 25% for even better financial health!";

const APR_EXPLANATION: &str = "💳 <b>Understanding APR (Annual Percentage Rate)</b>

APR stands for Annual Percentage Rate - it's the yearly cost of borrowing money, expressed as a percentage.

<b>What APR includes:</b>
• Interest rate on the loan
• Fees and charges
• Other costs associated with the loan

<b>Why APR matters:</b>
• <b>True Cost</b>: Shows the real cost of borrowing, not just the interest rate
• <b>Comparison Tool</b>: Helps you compare different loan offers
• <b>Budget Planning</b>: Helps you understand your monthly payments

<b>Example</b>: A credit card with 18% APR means you'll pay $18 in interest for every $100 you borrow for a full year.

<b>Pro tip</b>: Lower APR = less money you pay back. Always shop around for the best APR!";

const INVESTING_EXPLANATION: &str = "📈 <b>Stock Investing Fundamentals</b>

<b>What are stocks?</b>
Stocks represent ownership shares in a company. When you buy stock, you become a partial owner.

<b>Key Concepts:</b>
• <b>Risk vs Return</b>: Higher potential returns usually come with higher risk
• <b>Diversification</b>: Don't put all your money in one stock - spread it across different companies and sectors
• <b>Long-term Thinking</b>: Stock prices fluctuate daily, but historically, markets tend to rise over time
• <b>Research</b>: Always research companies before investing

<b>Why diversification matters:</b>
• Reduces risk by spreading investments across different assets
• If one stock performs poorly, others may perform well
• Helps protect your portfolio from major losses

<b>Pro tip</b>: Start with index funds or ETFs for instant diversification, then consider individual stocks as you learn more!";

const GENERAL_EXPLANATION: &str = "💰 <b>Financial Literacy Basics</b>

<b>Essential Financial Skills:</b>
• <b>Budgeting</b>: Track income and expenses to live within your means
• <b>Saving</b>: Build an emergency fund (3-6 months of expenses)
• <b>Investing</b>: Make your money work for you over time
• <b>Debt Management</b>: Understand good vs bad debt
• <b>Credit</b>: Build and maintain good credit scores

<b>The 50/30/20 Rule:</b>
• 50% for needs (housing, food, utilities)
• 30% for wants (entertainment, dining out)
• 20% for savings and debt repayment

<b>Emergency Fund Priority:</b>
Before investing, build an emergency fund. This protects you from unexpected expenses without going into debt.

<b>Pro tip</b>: Start small and be consistent. Even $25/month adds up over time!";

const MENU_EXPLANATION: &str = "🤖 <b>Financial Learning Assistant</b>

I'm here to help you understand financial concepts! Here are some topics I can explain:

• <b>Budgeting</b>: 30% rule, 50/30/20 rule, emergency funds
• <b>Credit</b>: APR, credit scores, debt management
• <b>Investing</b>: Stocks, diversification, risk vs return
• <b>Saving</b>: Building wealth, compound interest
• <b>General Finance</b>: Financial planning, money management

Try asking about any of these topics, or use the quick question buttons below for instant explanations!

<b>Example questions:</b>
- <i>Why is the 30% rule important?</i>
- <i>What's the difference between APR and interest rate?</i>
- <i>How does compound interest work?</i>
- <i>What is diversification in investing?</i>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_each_topic() {
        assert_eq!(Topic::classify("Why is the 30% rule important?"), Topic::Housing);
        assert_eq!(Topic::classify("what does APR mean"), Topic::Apr);
        assert_eq!(Topic::classify("stocks and diversification"), Topic::Investing);
        assert_eq!(Topic::classify("how do I save money"), Topic::GeneralFinance);
        assert_eq!(Topic::classify("asdf"), Topic::Menu);
    }

    #[test]
    fn earlier_topic_wins_on_overlap() {
        // "rent" and "budget" beat "interest rate"
        assert_eq!(
            Topic::classify("What interest rate should my rent budget assume?"),
            Topic::Housing
        );
        // "rate" beats "financial"
        assert_eq!(Topic::classify("Is a financial rate good?"), Topic::Apr);
        // "invest" beats "money"
        assert_eq!(Topic::classify("Where do I invest money?"), Topic::Investing);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(Topic::classify("HOUSING COSTS"), Topic::Housing);
        assert_eq!(Topic::classify("Annual Percentage"), Topic::Apr);
    }

    #[test]
    fn keywords_match_inside_words() {
        // "interest" and "rate" are not present, but "apr" is inside "april"
        assert_eq!(Topic::classify("april"), Topic::Apr);
        assert_eq!(Topic::classify("portfolio tips"), Topic::Investing);
    }

    #[test]
    fn respond_returns_the_topic_text() {
        assert_eq!(respond("What is APR?"), APR_EXPLANATION);
        assert_eq!(respond(""), MENU_EXPLANATION);
        assert!(respond("rent").contains("30% Rule"));
    }

    #[test]
    fn quick_questions_route_to_their_topic() {
        assert_eq!(
            Topic::classify(QuickQuestion::ThirtyPercentRule.prompt()),
            Topic::Housing
        );
        assert_eq!(Topic::classify(QuickQuestion::WhatIsApr.prompt()), Topic::Apr);
        assert_eq!(
            Topic::classify(QuickQuestion::StockBasics.prompt()),
            Topic::Investing
        );
    }

    #[test]
    fn quick_question_lookup_by_label() {
        assert_eq!(
            QuickQuestion::from_label("What is APR?"),
            Some(QuickQuestion::WhatIsApr)
        );
        assert_eq!(QuickQuestion::from_label("what is apr?"), None);
    }
}
