//! Closed variants for the schema's polymorphic resource interfaces.
//!
//! The schema exposes `EntitlementResource` and `ResultResource` as
//! interfaces with a fixed set of implementors; clients dispatch on the
//! concrete variant rather than on runtime type resolution.

use serde::{Deserialize, Serialize};

/// Concrete implementors of the schema's `EntitlementResource` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntitlementResource {
    /// A marketplace.
    Marketplace,
    /// An organization.
    Organization,
    /// A media channel.
    MediaChannel,
}

impl EntitlementResource {
    /// GraphQL type name, as spelled by `EntitlementResourceTypeEnum`.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Marketplace => "Marketplace",
            Self::Organization => "Organization",
            Self::MediaChannel => "MediaChannel",
        }
    }

    /// Singular root query field for this resource.
    #[must_use]
    pub const fn query_field(self) -> &'static str {
        match self {
            Self::Marketplace => "marketplace",
            Self::Organization => "organization",
            Self::MediaChannel => "mediaChannel",
        }
    }

    /// Connection (plural) root query field for this resource.
    #[must_use]
    pub const fn connection_field(self) -> &'static str {
        match self {
            Self::Marketplace => "marketplaces",
            Self::Organization => "organizations",
            Self::MediaChannel => "mediaChannels",
        }
    }
}

/// Concrete implementors of the schema's `ResultResource` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultResource {
    /// A marketing ad.
    MarketingAd,
    /// A marketing campaign.
    MarketingCampaign,
}

impl ResultResource {
    /// GraphQL type name.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::MarketingAd => "MarketingAd",
            Self::MarketingCampaign => "MarketingCampaign",
        }
    }

    /// Singular root query field for this resource.
    #[must_use]
    pub const fn query_field(self) -> &'static str {
        match self {
            Self::MarketingAd => "marketingAd",
            Self::MarketingCampaign => "marketingCampaign",
        }
    }

    /// Connection (plural) root query field for this resource.
    #[must_use]
    pub const fn connection_field(self) -> &'static str {
        match self {
            Self::MarketingAd => "marketingAds",
            Self::MarketingCampaign => "marketingCampaigns",
        }
    }
}
