use crate::catalog::Service;

actions! {
    service = "secretsmanager";
    /// Grants permission to retrieve and decrypt a list of secrets
    BatchGetSecretValue: Read,
    /// Grants permission to cancel an in-progress secret rotation
    CancelRotateSecret: Write,
    /// Grants permission to create a secret that stores encrypted data that can be queried and rotated
    CreateSecret: Write,
    /// Grants permission to delete the resource policy attached to a secret
    DeleteResourcePolicy: PermissionsManagement,
    /// Grants permission to delete a secret
    DeleteSecret: Write,
    /// Grants permission to retrieve the metadata about a secret, but not the encrypted data
    DescribeSecret: Read,
    /// Grants permission to generate a random string for use in password creation
    GetRandomPassword: Read,
    /// Grants permission to get the resource policy attached to a secret
    GetResourcePolicy: Read,
    /// Grants permission to retrieve and decrypt the encrypted data
    GetSecretValue: Read,
    /// Grants permission to list the available versions of a secret
    ListSecretVersionIds: Read,
    /// Grants permission to list the available secrets
    ListSecrets: List,
    /// Grants permission to attach a resource policy to a secret
    PutResourcePolicy: PermissionsManagement,
    /// Grants permission to create a new version of the secret with new encrypted data
    PutSecretValue: Write,
    /// Grants permission to remove regions from replication
    RemoveRegionsFromReplication: Write,
    /// Grants permission to convert an existing secret to a multi-Region secret and begin replicating the secret to a list of new regions
    ReplicateSecretToRegions: Write,
    /// Grants permission to cancel deletion of a secret
    RestoreSecret: Write,
    /// Grants permission to start rotation of a secret
    RotateSecret: Write,
    /// Grants permission to remove the secret from replication and promote the secret to a regional secret in the replica Region
    StopReplicationToReplica: Write,
    /// Grants permission to add tags to a secret
    TagResource: Tagging,
    /// Grants permission to remove tags from a secret
    UntagResource: Tagging,
    /// Grants permission to update a secret with new metadata or with a new version of the encrypted data
    UpdateSecret: Write,
    /// Grants permission to move a stage from one secret to another
    UpdateSecretVersionStage: Write,
    /// Grants permission to validate a resource policy before attaching policy
    ValidateResourcePolicy: PermissionsManagement,
}

pub mod resource {
    resources! {
        service = "secretsmanager";
        secret => Secret { partition, region, account, secret_id } =
            "arn:{partition}:secretsmanager:{region}:{account}:secret:{secret_id}";
    }
}

pub const SERVICE: Service = Service {
    prefix: PREFIX,
    name: "AWS Secrets Manager",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awssecretsmanager.html",
    actions: Action::ENTRIES,
    resource_types: resource::RESOURCE_TYPES,
};

#[cfg(test)]
mod test {
    use super::{resource, Action};
    use crate::iam::AccessLevel;

    #[test]
    fn secret_segments() {
        let arn = resource::secret()
            .partition("aws")
            .region("eu-west-1")
            .account("123456789012")
            .secret_id("db-password-AbCdEf")
            .build();
        assert_eq!(arn, "arn:aws:secretsmanager:eu-west-1:123456789012:secret:db-password-AbCdEf");
        assert_eq!(resource::secret().region("eu-west-1").build(), "arn:*:secretsmanager:eu-west-1:*:secret:*");
    }

    #[test]
    fn access_levels() {
        assert_eq!(Action::GetSecretValue.access_level(), AccessLevel::Read);
        assert_eq!(Action::PutResourcePolicy.access_level(), AccessLevel::PermissionsManagement);
        assert_eq!("secretsmanager:getsecretvalue".parse::<Action>().unwrap(), Action::GetSecretValue);
    }
}
