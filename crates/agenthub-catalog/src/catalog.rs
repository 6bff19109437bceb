//! The immutable agent catalog
//!
//! Agents and categories are defined at construction and never change.
//! Insertion order is significant: the filter engine preserves it.

use agenthub_types::{Agent, AgentId, Category, CategoryId, Credits};

/// The immutable list of agents and categories
#[derive(Debug, Clone)]
pub struct Catalog {
    agents: Vec<Agent>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from explicit parts (tests, alternate listings)
    pub fn new(agents: Vec<Agent>, categories: Vec<Category>) -> Self {
        Self { agents, categories }
    }

    /// All agents in catalog order
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// All categories, the synthetic "all" first
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up an agent by id
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// The production catalog: six agents across six categories plus the
    /// synthetic "all" category.
    pub fn production() -> Self {
        let agents = vec![
            Agent {
                id: AgentId(1),
                name: "Smart Customer Support Agent".into(),
                description: "Automates customer inquiries with intelligent responses, reducing response time by 80% while maintaining high satisfaction rates.".into(),
                category: CategoryId::new("customer-service"),
                cost: Credits::new(25),
                rating: 4.9,
                reviews: 2300,
            },
            Agent {
                id: AgentId(2),
                name: "Data Analysis Agent".into(),
                description: "Processes complex datasets and generates actionable insights with automated reporting and visualization capabilities.".into(),
                category: CategoryId::new("analytics"),
                cost: Credits::new(45),
                rating: 4.8,
                reviews: 1800,
            },
            Agent {
                id: AgentId(3),
                name: "Content Writing Agent".into(),
                description: "Creates high-quality, engaging content across multiple formats while maintaining brand voice and SEO optimization.".into(),
                category: CategoryId::new("content"),
                cost: Credits::new(35),
                rating: 4.7,
                reviews: 3100,
            },
            Agent {
                id: AgentId(4),
                name: "Email Automation Agent".into(),
                description: "Manages email campaigns with personalized content, smart scheduling, and performance tracking for maximum engagement.".into(),
                category: CategoryId::new("email"),
                cost: Credits::new(30),
                rating: 4.9,
                reviews: 2700,
            },
            Agent {
                id: AgentId(5),
                name: "Sales Assistant Agent".into(),
                description: "Qualifies leads, schedules meetings, and provides sales insights to accelerate your sales pipeline and close deals faster.".into(),
                category: CategoryId::new("sales"),
                cost: Credits::new(40),
                rating: 4.6,
                reviews: 1900,
            },
            Agent {
                id: AgentId(6),
                name: "Task Automation Agent".into(),
                description: "Streamlines repetitive workflows across multiple platforms, saving hours of manual work with intelligent automation.".into(),
                category: CategoryId::new("utilities"),
                cost: Credits::new(20),
                rating: 4.8,
                reviews: 4200,
            },
        ];

        let categories = vec![
            Category { id: CategoryId::all(), name: "All Agents".into() },
            Category { id: CategoryId::new("customer-service"), name: "Customer Service".into() },
            Category { id: CategoryId::new("analytics"), name: "Analytics".into() },
            Category { id: CategoryId::new("content"), name: "Content".into() },
            Category { id: CategoryId::new("email"), name: "Email".into() },
            Category { id: CategoryId::new("utilities"), name: "Utilities".into() },
            Category { id: CategoryId::new("sales"), name: "Sales".into() },
        ];

        Self { agents, categories }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::production()
    }
}
