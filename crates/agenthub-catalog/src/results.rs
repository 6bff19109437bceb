//! Canned invocation results
//!
//! Each production agent has a fixed textual result keyed by its name.
//! Unknown names fall back to a generic completion message.

/// Fallback result for agents without a canned payload
pub const GENERIC_RESULT: &str = "Task completed successfully!";

/// Look up the canned result text for an agent name.
pub fn result_for(agent_name: &str) -> &'static str {
    match agent_name {
        "Smart Customer Support Agent" => {
            "Customer Support Complete!\n\n\
             Inquiry: Product return request\n\
             Solution: Generated return label #RT-2024-1847\n\
             Resolution time: 2.3 minutes\n\
             Customer satisfaction: 98%\n\n\
             Next steps: Follow-up email scheduled for 24 hours"
        }
        "Data Analysis Agent" => {
            "Data Analysis Complete!\n\n\
             Key Insights Found:\n\
             - Revenue increased 23% this quarter\n\
             - Top performing product: Premium Widget (+45%)\n\
             - Peak sales time: 2-4 PM daily\n\
             - Customer retention: 87% (+12%)\n\n\
             Recommendations:\n\
             - Expand premium inventory\n\
             - Schedule campaigns for peak hours"
        }
        "Content Writing Agent" => {
            "Content Created Successfully!\n\n\
             Blog Post: \"10 Productivity Hacks for Remote Teams\"\n\
             Word count: 1,247 words\n\
             SEO score: 94/100 (Excellent)\n\
             Readability: Grade A\n\
             Internal links: 8 added\n\n\
             Meta description and social media snippets included!"
        }
        "Email Automation Agent" => {
            "Email Campaign Launched!\n\n\
             Campaign Stats:\n\
             - 5,000 emails sent successfully\n\
             - Open rate: 32% (+8% above average)\n\
             - Click-through rate: 12%\n\
             - Conversions: 47 sales generated\n\n\
             A/B test winner: Subject line \"Exclusive offer inside\"\n\
             Next campaign scheduled for Friday"
        }
        "Sales Assistant Agent" => {
            "Sales Task Complete!\n\n\
             Lead Qualification Results:\n\
             - 23 leads processed\n\
             - 12 qualified prospects identified\n\
             - 8 meetings scheduled this week\n\
             - Pipeline value: $47,500\n\n\
             Top priority: TechCorp Inc. (90% close probability)\n\
             Next follow-up: Tomorrow 2 PM"
        }
        "Task Automation Agent" => {
            "Automation Complete!\n\n\
             Workflow Created:\n\
             - Slack notifications -> Notion database\n\
             - Email attachments -> Google Drive\n\
             - Calendar events -> Team updates\n\n\
             Time savings: 4.5 hours/week\n\
             Efficiency boost: +67%\n\
             23 repetitive tasks eliminated"
        }
        _ => GENERIC_RESULT,
    }
}
