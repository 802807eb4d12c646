use crate::catalog::Service;

actions! {
    service = "route53";
    /// Grants permission to activate a key-signing key so that it can be used for signing by DNSSEC
    ActivateKeySigningKey: Write,
    /// Grants permission to associate an additional Amazon VPC with a private hosted zone
    AssociateVPCWithHostedZone: Write,
    /// Grants permission to create or delete CIDR blocks within a CIDR collection
    ChangeCidrCollection: Write,
    /// Grants permission to create, update, or delete a record, which contains authoritative DNS information for a specified domain or subdomain name
    ChangeResourceRecordSets: Write,
    /// Grants permission to add, edit, or delete tags for a health check or a hosted zone
    ChangeTagsForResource: Tagging,
    /// Grants permission to create a new CIDR collection
    CreateCidrCollection: Write,
    /// Grants permission to create a new health check, which monitors the health and performance of your web applications, web servers, and other resources
    CreateHealthCheck: Write,
    /// Grants permission to create a public hosted zone, which you use to specify how the Domain Name System (DNS) routes traffic on the Internet for a domain, or a private hosted zone for an Amazon VPC
    CreateHostedZone: Write,
    /// Grants permission to create a new key-signing key associated with a hosted zone
    CreateKeySigningKey: Write,
    /// Grants permission to create a configuration for DNS query logging
    CreateQueryLoggingConfig: Write,
    /// Grants permission to create a delegation set (a group of four name servers) that can be reused by multiple hosted zones
    CreateReusableDelegationSet: Write,
    /// Grants permission to create a traffic policy, which you use to create multiple DNS records for one domain name (such as example.com) or one subdomain name (such as www.example.com)
    CreateTrafficPolicy: Write,
    /// Grants permission to create records in a specified hosted zone based on the settings in a specified traffic policy version
    CreateTrafficPolicyInstance: Write,
    /// Grants permission to create a new version of an existing traffic policy
    CreateTrafficPolicyVersion: Write,
    /// Grants permission to authorize the AWS account that created a specified VPC to submit an AssociateVPCWithHostedZone request, which associates the VPC with a specified hosted zone that was created by a different account
    CreateVPCAssociationAuthorization: Write,
    /// Grants permission to deactivate a key-signing key so that it will not be used for signing by DNSSEC
    DeactivateKeySigningKey: Write,
    /// Grants permission to delete a CIDR collection
    DeleteCidrCollection: Write,
    /// Grants permission to delete a health check
    DeleteHealthCheck: Write,
    /// Grants permission to delete a hosted zone
    DeleteHostedZone: Write,
    /// Grants permission to delete a key-signing key
    DeleteKeySigningKey: Write,
    /// Grants permission to delete a configuration for DNS query logging
    DeleteQueryLoggingConfig: Write,
    /// Grants permission to delete a reusable delegation set
    DeleteReusableDelegationSet: Write,
    /// Grants permission to delete a traffic policy
    DeleteTrafficPolicy: Write,
    /// Grants permission to delete a traffic policy instance and all the records that Route 53 created when you created the instance
    DeleteTrafficPolicyInstance: Write,
    /// Grants permission to remove authorization for associating an Amazon Virtual Private Cloud with a Route 53 private hosted zone
    DeleteVPCAssociationAuthorization: Write,
    /// Grants permission to disable DNSSEC signing in a specific hosted zone
    DisableHostedZoneDNSSEC: Write,
    /// Grants permission to disassociate an Amazon Virtual Private Cloud from a Route 53 private hosted zone
    DisassociateVPCFromHostedZone: Write,
    /// Grants permission to enable DNSSEC signing in a specific hosted zone
    EnableHostedZoneDNSSEC: Write,
    /// Grants permission to get the specified limit for the current account, for example, the maximum number of health checks that you can create using the account
    GetAccountLimit: Read,
    /// Grants permission to get the current status of a request to create, update, or delete one or more records
    GetChange: Read,
    /// Grants permission to get a list of the IP ranges that are used by Route 53 health checkers to check the health of your resources
    GetCheckerIpRanges: List,
    /// Grants permission to get information about DNSSEC for a specific hosted zone, including the key-signing keys in the hosted zone
    GetDNSSEC: Read,
    /// Grants permission to get information about whether a specified geographic location is supported for Route 53 geolocation records
    GetGeoLocation: List,
    /// Grants permission to get information about a specified health check
    GetHealthCheck: Read,
    /// Grants permission to get the number of health checks that are associated with the current AWS account
    GetHealthCheckCount: List,
    /// Grants permission to get the reason that a specified health check failed most recently
    GetHealthCheckLastFailureReason: Read,
    /// Grants permission to get the status of a specified health check
    GetHealthCheckStatus: Read,
    /// Grants permission to get information about a specified hosted zone including the four name servers that Route 53 assigned to the hosted zone
    GetHostedZone: Read,
    /// Grants permission to get the number of hosted zones that are associated with the current AWS account
    GetHostedZoneCount: List,
    /// Grants permission to get the specified limit for a specified hosted zone
    GetHostedZoneLimit: Read,
    /// Grants permission to get information about a specified configuration for DNS query logging
    GetQueryLoggingConfig: Read,
    /// Grants permission to get information about a specified reusable delegation set, including the four name servers that are assigned to the delegation set
    GetReusableDelegationSet: Read,
    /// Grants permission to get the maximum number of hosted zones that you can associate with the specified reusable delegation set
    GetReusableDelegationSetLimit: Read,
    /// Grants permission to get information about a specified traffic policy version
    GetTrafficPolicy: Read,
    /// Grants permission to get information about a specified traffic policy instance
    GetTrafficPolicyInstance: Read,
    /// Grants permission to get the number of traffic policy instances that are associated with the current AWS account
    GetTrafficPolicyInstanceCount: Read,
    /// Grants permission to get a list of the CIDR blocks within a specified CIDR collection
    ListCidrBlocks: List,
    /// Grants permission to get a list of the CIDR collections that are associated with the current AWS account
    ListCidrCollections: List,
    /// Grants permission to get a list of the CIDR locations that belong to a specified CIDR collection
    ListCidrLocations: List,
    /// Grants permission to get a list of geographic locations that Route 53 supports for geolocation
    ListGeoLocations: List,
    /// Grants permission to get a list of the health checks that are associated with the current AWS account
    ListHealthChecks: List,
    /// Grants permission to get a list of the public and private hosted zones that are associated with the current AWS account
    ListHostedZones: List,
    /// Grants permission to get a list of your hosted zones in lexicographic order. Hosted zones are sorted by name with the labels reversed, for example, com.example.www
    ListHostedZonesByName: List,
    /// Grants permission to get a list of all the private hosted zones that a specified VPC is associated with
    ListHostedZonesByVPC: List,
    /// Grants permission to list the configurations for DNS query logging that are associated with the current AWS account or the configuration that is associated with a specified hosted zone
    ListQueryLoggingConfigs: List,
    /// Grants permission to list the records in a specified hosted zone
    ListResourceRecordSets: List,
    /// Grants permission to list the reusable delegation sets that are associated with the current AWS account
    ListReusableDelegationSets: List,
    /// Grants permission to list tags for one health check or hosted zone
    ListTagsForResource: Read,
    /// Grants permission to list tags for up to 10 health checks or hosted zones
    ListTagsForResources: Read,
    /// Grants permission to get information about the latest version for every traffic policy that is associated with the current AWS account
    ListTrafficPolicies: List,
    /// Grants permission to get information about the traffic policy instances that you created by using the current AWS account
    ListTrafficPolicyInstances: List,
    /// Grants permission to get information about the traffic policy instances that you created in a specified hosted zone
    ListTrafficPolicyInstancesByHostedZone: List,
    /// Grants permission to get information about the traffic policy instances that you created using a specified traffic policy version
    ListTrafficPolicyInstancesByPolicy: List,
    /// Grants permission to get information about all the versions for a specified traffic policy
    ListTrafficPolicyVersions: List,
    /// Grants permission to get a list of the VPCs that were created by other accounts and that can be associated with a specified hosted zone
    ListVPCAssociationAuthorizations: List,
    /// Grants permission to get the value that Route 53 returns in response to a DNS query for a specified record name and type
    TestDNSAnswer: Read,
    /// Grants permission to update an existing health check
    UpdateHealthCheck: Write,
    /// Grants permission to update the comment for a specified hosted zone
    UpdateHostedZoneComment: Write,
    /// Grants permission to update the comment for a specified traffic policy version
    UpdateTrafficPolicyComment: Write,
    /// Grants permission to update the records in a specified hosted zone that were created based on the settings in a specified traffic policy version
    UpdateTrafficPolicyInstance: Write,
}

pub mod resource {
    resources! {
        service = "route53";
        cidrcollection => CidrCollection { partition, id } = "arn:{partition}:route53:::cidrcollection/{id}";
        change => Change { partition, id } = "arn:{partition}:route53:::change/{id}";
        delegationset => DelegationSet { partition, id } = "arn:{partition}:route53:::delegationset/{id}";
        healthcheck => HealthCheck { partition, id } = "arn:{partition}:route53:::healthcheck/{id}";
        hostedzone => HostedZone { partition, id } = "arn:{partition}:route53:::hostedzone/{id}";
        trafficpolicy => TrafficPolicy { partition, id } = "arn:{partition}:route53:::trafficpolicy/{id}";
        trafficpolicyinstance => TrafficPolicyInstance { partition, id } =
            "arn:{partition}:route53:::trafficpolicyinstance/{id}";
        queryloggingconfig => QueryLoggingConfig { partition, id } =
            "arn:{partition}:route53:::queryloggingconfig/{id}";
    }
}

pub const SERVICE: Service = Service {
    prefix: PREFIX,
    name: "Amazon Route 53",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonroute53.html",
    actions: Action::ENTRIES,
    resource_types: resource::RESOURCE_TYPES,
};

#[cfg(test)]
mod test {
    use super::{resource, Action};
    use crate::aws::ARN;

    #[test]
    fn hosted_zone_is_global() {
        let arn = resource::hostedzone().partition("aws").id("Z1D633PJN98FT9").build();
        assert_eq!(arn, "arn:aws:route53:::hostedzone/Z1D633PJN98FT9");
        let parsed: ARN = arn.parse().unwrap();
        assert!(parsed.region().is_empty());
        assert!(parsed.account().is_empty());
    }

    #[test]
    fn change_defaults() {
        assert_eq!(resource::change().build(), "arn:*:route53:::change/*");
    }

    #[test]
    fn record_set_actions() {
        assert_eq!(Action::ChangeResourceRecordSets.as_str(), "route53:ChangeResourceRecordSets");
        assert_eq!(Action::ListHostedZonesByName.as_str(), "route53:ListHostedZonesByName");
    }
}
