use crate::catalog::Service;

actions! {
    service = "kms";
    /// Controls permission to cancel the scheduled deletion of an AWS KMS key
    CancelKeyDeletion: Write,
    /// Controls permission to connect or reconnect a custom key store to its associated AWS CloudHSM cluster or external key manager outside of AWS
    ConnectCustomKeyStore: Write,
    /// Controls permission to create an alias for an AWS KMS key
    CreateAlias: Write,
    /// Controls permission to create a custom key store that is backed by an AWS CloudHSM cluster or an external key manager outside of AWS
    CreateCustomKeyStore: Write,
    /// Controls permission to add a grant to an AWS KMS key
    CreateGrant: PermissionsManagement,
    /// Controls permission to create an AWS KMS key that can be used to protect data keys and other sensitive information
    CreateKey: Write,
    /// Controls permission to decrypt ciphertext that was encrypted under an AWS KMS key
    Decrypt: Write,
    /// Controls permission to delete an alias
    DeleteAlias: Write,
    /// Controls permission to delete a custom key store
    DeleteCustomKeyStore: Write,
    /// Controls permission to delete cryptographic material that you imported into an AWS KMS key
    DeleteImportedKeyMaterial: Write,
    /// Controls permission to use the specified AWS KMS key to derive shared secrets
    DeriveSharedSecret: Write,
    /// Controls permission to view detailed information about custom key stores in the account and region
    DescribeCustomKeyStores: Read,
    /// Controls permission to view detailed information about an AWS KMS key
    DescribeKey: Read,
    /// Controls permission to disable an AWS KMS key, which prevents it from being used in cryptographic operations
    DisableKey: Write,
    /// Controls permission to disable automatic rotation of a customer managed AWS KMS key
    DisableKeyRotation: Write,
    /// Controls permission to disconnect the custom key store from its associated AWS CloudHSM cluster or external key manager outside of AWS
    DisconnectCustomKeyStore: Write,
    /// Controls permission to change the state of an AWS KMS key to enabled
    EnableKey: Write,
    /// Controls permission to enable automatic rotation of the cryptographic material in an AWS KMS key
    EnableKeyRotation: Write,
    /// Controls permission to use the specified AWS KMS key to encrypt data and data keys
    Encrypt: Write,
    /// Controls permission to use the AWS KMS key to generate data keys
    GenerateDataKey: Write,
    /// Controls permission to use the AWS KMS key to generate data key pairs
    GenerateDataKeyPair: Write,
    /// Controls permission to use the AWS KMS key to generate data key pairs. Unlike the GenerateDataKeyPair operation, this operation returns an encrypted private key but not a plaintext copy of the private key
    GenerateDataKeyPairWithoutPlaintext: Write,
    /// Controls permission to use the AWS KMS key to generate a data key. Unlike the GenerateDataKey operation, this operation returns an encrypted data key but not a plaintext version of the data key
    GenerateDataKeyWithoutPlaintext: Write,
    /// Controls permission to use the AWS KMS key to generate message authentication codes
    GenerateMac: Write,
    /// Controls permission to get a cryptographically secure random byte string from AWS KMS
    GenerateRandom: Write,
    /// Controls permission to view the key policy for the specified AWS KMS key
    GetKeyPolicy: Read,
    /// Controls permission to determine whether automatic key rotation is enabled on the AWS KMS key
    GetKeyRotationStatus: Read,
    /// Controls permission to get data that is required to import cryptographic material into a customer managed key, including a public key and import token
    GetParametersForImport: Read,
    /// Controls permission to download the public key of an asymmetric AWS KMS key
    GetPublicKey: Read,
    /// Controls permission to import cryptographic material into an AWS KMS key
    ImportKeyMaterial: Write,
    /// Controls permission to view the aliases that are defined in the account. Aliases are optional friendly names that you can associate with AWS KMS keys
    ListAliases: List,
    /// Controls permission to view all grants for an AWS KMS key
    ListGrants: List,
    /// Controls permission to view the names of key policies for an AWS KMS key
    ListKeyPolicies: List,
    /// Controls permission to view the list of completed key rotations for an AWS KMS key
    ListKeyRotations: List,
    /// Controls permission to view the key ID and Amazon Resource Name (ARN) of all AWS KMS keys in the account
    ListKeys: List,
    /// Controls permission to view all tags that are attached to an AWS KMS key
    ListResourceTags: Read,
    /// Controls permission to view grants in which the specified principal is the retiring principal
    ListRetirableGrants: List,
    /// Controls permission to replace the key policy for the specified AWS KMS key
    PutKeyPolicy: PermissionsManagement,
    /// Controls permission to decrypt data as part of the process that decrypts and reencrypts the data within AWS KMS
    ReEncryptFrom: Write,
    /// Controls permission to encrypt data as part of the process that decrypts and reencrypts the data within AWS KMS
    ReEncryptTo: Write,
    /// Controls permission to replicate a multi-Region primary key
    ReplicateKey: Write,
    /// Controls permission to retire a grant
    RetireGrant: PermissionsManagement,
    /// Controls permission to revoke a grant, which denies permission for all operations that depend on the grant
    RevokeGrant: PermissionsManagement,
    /// Controls permission to invoke on-demand rotation of the cryptographic material in an AWS KMS key
    RotateKeyOnDemand: Write,
    /// Controls permission to schedule deletion of an AWS KMS key
    ScheduleKeyDeletion: Write,
    /// Controls permission to produce a digital signature for a message
    Sign: Write,
    /// Controls access to internal APIs that synchronize multi-Region keys
    SynchronizeMultiRegionKey: Write,
    /// Controls permission to create or update tags that are attached to an AWS KMS key
    TagResource: Tagging,
    /// Controls permission to delete tags that are attached to an AWS KMS key
    UntagResource: Tagging,
    /// Controls permission to associate an alias with a different AWS KMS key
    UpdateAlias: Write,
    /// Controls permission to change the properties of a custom key store
    UpdateCustomKeyStore: Write,
    /// Controls permission to delete or change the description of an AWS KMS key
    UpdateKeyDescription: Write,
    /// Controls permission to update the primary Region of a multi-Region primary key
    UpdatePrimaryRegion: Write,
    /// Controls permission to use the specified AWS KMS key to verify digital signatures
    Verify: Write,
    /// Controls permission to use the AWS KMS key to verify message authentication codes
    VerifyMac: Write,
}

pub mod resource {
    resources! {
        service = "kms";
        alias => Alias { partition, region, account, alias } =
            "arn:{partition}:kms:{region}:{account}:alias/{alias}";
        key => Key { partition, region, account, key_id } =
            "arn:{partition}:kms:{region}:{account}:key/{key_id}";
    }
}

pub const SERVICE: Service = Service {
    prefix: PREFIX,
    name: "AWS Key Management Service",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awskeymanagementservice.html",
    actions: Action::ENTRIES,
    resource_types: resource::RESOURCE_TYPES,
};

#[cfg(test)]
mod test {
    use super::resource;

    #[test]
    fn key_in_china_partition() {
        let arn = resource::key()
            .partition("aws-cn")
            .region("cn-north-1")
            .account("123456789012")
            .key_id("1234abcd-12ab-34cd-56ef-1234567890ab")
            .build();
        assert_eq!(arn, "arn:aws-cn:kms:cn-north-1:123456789012:key/1234abcd-12ab-34cd-56ef-1234567890ab");
    }

    #[test]
    fn alias_empty_values_are_wildcards() {
        assert_eq!(resource::alias().alias("").region("").build(), "arn:*:kms:*:*:alias/*");
    }
}
