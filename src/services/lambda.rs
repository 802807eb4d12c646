use crate::catalog::Service;

actions! {
    service = "lambda";
    /// Grants permission to add permissions to the resource-based policy of a version of an AWS Lambda layer
    AddLayerVersionPermission: PermissionsManagement,
    /// Grants permission to give an AWS service or another account permission to use an AWS Lambda function
    AddPermission: PermissionsManagement,
    /// Grants permission to create an alias for a Lambda function version
    CreateAlias: Write,
    /// Grants permission to create an AWS Lambda code signing config
    CreateCodeSigningConfig: Write,
    /// Grants permission to create a mapping between an event source and an AWS Lambda function
    CreateEventSourceMapping: Write,
    /// Grants permission to create an AWS Lambda function
    CreateFunction: Write,
    /// Grants permission to create a function url configuration for a Lambda function
    CreateFunctionUrlConfig: Write,
    /// Grants permission to delete an AWS Lambda function alias
    DeleteAlias: Write,
    /// Grants permission to delete an AWS Lambda code signing config
    DeleteCodeSigningConfig: Write,
    /// Grants permission to delete an AWS Lambda event source mapping
    DeleteEventSourceMapping: Write,
    /// Grants permission to delete an AWS Lambda function
    DeleteFunction: Write,
    /// Grants permission to detach a code signing config from an AWS Lambda function
    DeleteFunctionCodeSigningConfig: Write,
    /// Grants permission to remove a concurrent execution limit from an AWS Lambda function
    DeleteFunctionConcurrency: Write,
    /// Grants permission to delete the configuration for asynchronous invocation for an AWS Lambda function, version, or alias
    DeleteFunctionEventInvokeConfig: Write,
    /// Grants permission to delete function url configuration for a Lambda function
    DeleteFunctionUrlConfig: Write,
    /// Grants permission to delete a version of an AWS Lambda layer
    DeleteLayerVersion: Write,
    /// Grants permission to delete the provisioned concurrency configuration for an AWS Lambda function
    DeleteProvisionedConcurrencyConfig: Write,
    /// Grants permission to disable replication for a Lambda@Edge function
    DisableReplication: PermissionsManagement,
    /// Grants permission to enable replication for a Lambda@Edge function
    EnableReplication: PermissionsManagement,
    /// Grants permission to view details about an account's limits and usage in an AWS Region
    GetAccountSettings: List,
    /// Grants permission to view details about an AWS Lambda function alias
    GetAlias: Read,
    /// Grants permission to view details about an AWS Lambda code signing config
    GetCodeSigningConfig: Read,
    /// Grants permission to view details about an AWS Lambda event source mapping
    GetEventSourceMapping: Read,
    /// Grants permission to view details about an AWS Lambda function
    GetFunction: Read,
    /// Grants permission to view the code signing config arn attached to an AWS Lambda function
    GetFunctionCodeSigningConfig: Read,
    /// Grants permission to view details about the reserved concurrency configuration for a function
    GetFunctionConcurrency: Read,
    /// Grants permission to view details about the version-specific settings of an AWS Lambda function or version
    GetFunctionConfiguration: Read,
    /// Grants permission to view the configuration for asynchronous invocation for a function, version, or alias
    GetFunctionEventInvokeConfig: Read,
    /// Grants permission to view the recursion configuration of an AWS Lambda function
    GetFunctionRecursionConfig: Read,
    /// Grants permission to read function url configuration for a Lambda function
    GetFunctionUrlConfig: Read,
    /// Grants permission to view details about a version of an AWS Lambda layer. Note this action also supports GetLayerVersionByArn API
    GetLayerVersion: Read,
    /// Grants permission to view the resource-based policy for a version of an AWS Lambda layer
    GetLayerVersionPolicy: Read,
    /// Grants permission to view the resource-based policy for an AWS Lambda function, version, or alias
    GetPolicy: Read,
    /// Grants permission to view the provisioned concurrency configuration for an AWS Lambda function's alias or version
    GetProvisionedConcurrencyConfig: Read,
    /// Grants permission to view the runtime management configuration of an AWS Lambda function
    GetRuntimeManagementConfig: Read,
    /// Grants permission to invoke a function asynchronously (Deprecated)
    InvokeAsync: Write,
    /// Grants permission to invoke an AWS Lambda function
    InvokeFunction: Write,
    /// Grants permission to invoke an AWS Lambda function through url
    InvokeFunctionUrl: Write,
    /// Grants permission to retrieve a list of aliases for an AWS Lambda function
    ListAliases: List,
    /// Grants permission to retrieve a list of AWS Lambda code signing configs
    ListCodeSigningConfigs: List,
    /// Grants permission to retrieve a list of AWS Lambda event source mappings
    ListEventSourceMappings: List,
    /// Grants permission to retrieve a list of configurations for asynchronous invocation for a function
    ListFunctionEventInvokeConfigs: List,
    /// Grants permission to read function url configurations for a function
    ListFunctionUrlConfigs: List,
    /// Grants permission to retrieve a list of AWS Lambda functions, with the version-specific configuration of each function
    ListFunctions: List,
    /// Grants permission to list the functions that are attached to a code signing config
    ListFunctionsByCodeSigningConfig: List,
    /// Grants permission to retrieve a list of versions of an AWS Lambda layer
    ListLayerVersions: List,
    /// Grants permission to retrieve a list of AWS Lambda layers, with details about the latest version of each layer
    ListLayers: List,
    /// Grants permission to retrieve a list of provisioned concurrency configurations for an AWS Lambda function
    ListProvisionedConcurrencyConfigs: List,
    /// Grants permission to retrieve a list of tags for an AWS Lambda function, event source mapping, or code signing configuration
    ListTags: Read,
    /// Grants permission to retrieve a list of versions for an AWS Lambda function
    ListVersionsByFunction: List,
    /// Grants permission to create an AWS Lambda layer
    PublishLayerVersion: Write,
    /// Grants permission to create an AWS Lambda function version
    PublishVersion: Write,
    /// Grants permission to attach a code signing config to an AWS Lambda function
    PutFunctionCodeSigningConfig: Write,
    /// Grants permission to configure reserved concurrency for an AWS Lambda function
    PutFunctionConcurrency: Write,
    /// Grants permission to configures options for asynchronous invocation on an AWS Lambda function, version, or alias
    PutFunctionEventInvokeConfig: Write,
    /// Grants permission to update the recursion configuration of an AWS Lambda function
    PutFunctionRecursionConfig: Write,
    /// Grants permission to configure provisioned concurrency for an AWS Lambda function's alias or version
    PutProvisionedConcurrencyConfig: Write,
    /// Grants permission to update the runtime management configuration of an AWS Lambda function
    PutRuntimeManagementConfig: Write,
    /// Grants permission to remove a statement from the permissions policy for a version of an AWS Lambda layer
    RemoveLayerVersionPermission: PermissionsManagement,
    /// Grants permission to revoke function-use permission from an AWS service or another account
    RemovePermission: PermissionsManagement,
    /// Grants permission to add tags to an AWS Lambda function, event source mapping, or code signing configuration
    TagResource: Tagging,
    /// Grants permission to remove tags from an AWS Lambda function, event source mapping, or code signing configuration
    UntagResource: Tagging,
    /// Grants permission to update the configuration of an AWS Lambda function's alias
    UpdateAlias: Write,
    /// Grants permission to update an AWS Lambda code signing config
    UpdateCodeSigningConfig: Write,
    /// Grants permission to update the configuration of an AWS Lambda event source mapping
    UpdateEventSourceMapping: Write,
    /// Grants permission to update the code of an AWS Lambda function
    UpdateFunctionCode: Write,
    /// Grants permission to update the code signing config of an AWS Lambda function
    UpdateFunctionCodeSigningConfig: Write,
    /// Grants permission to modify the version-specific settings of an AWS Lambda function
    UpdateFunctionConfiguration: Write,
    /// Grants permission to modify the configuration for asynchronous invocation for an AWS Lambda function, version, or alias
    UpdateFunctionEventInvokeConfig: Write,
    /// Grants permission to update a function url configuration for a Lambda function
    UpdateFunctionUrlConfig: Write,
}

pub mod resource {
    resources! {
        service = "lambda";
        code_signing_config => CodeSigningConfig { partition, region, account, code_signing_config_id } =
            "arn:{partition}:lambda:{region}:{account}:code-signing-config:{code_signing_config_id}";
        event_source_mapping => EventSourceMapping { partition, region, account, uuid } =
            "arn:{partition}:lambda:{region}:{account}:event-source-mapping:{uuid}";
        function => Function { partition, region, account, function_name } =
            "arn:{partition}:lambda:{region}:{account}:function:{function_name}";
        function_alias => FunctionAlias { partition, region, account, function_name, alias } =
            "arn:{partition}:lambda:{region}:{account}:function:{function_name}:{alias}";
        function_version => FunctionVersion { partition, region, account, function_name, version } =
            "arn:{partition}:lambda:{region}:{account}:function:{function_name}:{version}";
        layer => Layer { partition, region, account, layer_name } =
            "arn:{partition}:lambda:{region}:{account}:layer:{layer_name}";
        layer_version => LayerVersion { partition, region, account, layer_name, layer_version } =
            "arn:{partition}:lambda:{region}:{account}:layer:{layer_name}:{layer_version}";
    }
}

pub const SERVICE: Service = Service {
    prefix: PREFIX,
    name: "AWS Lambda",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awslambda.html",
    actions: Action::ENTRIES,
    resource_types: resource::RESOURCE_TYPES,
};

#[cfg(test)]
mod test {
    use super::{resource, Action};
    use crate::iam::AccessLevel;

    #[test]
    fn function_alias() {
        let arn = resource::function_alias()
            .region("us-east-1")
            .account("123456789012")
            .function_name("resize")
            .alias("live")
            .build();
        assert_eq!(arn, "arn:*:lambda:us-east-1:123456789012:function:resize:live");
    }

    #[test]
    fn builders_are_reusable() {
        let function = resource::function().function_name("resize");
        assert_eq!(function.build(), function.build());
        assert_eq!(function.clone().region("eu-west-1").build(), "arn:*:lambda:eu-west-1:*:function:resize");
        assert_eq!(function.build(), "arn:*:lambda:*:*:function:resize");
    }

    #[test]
    fn invoke_is_write() {
        assert_eq!(Action::InvokeFunction.access_level(), AccessLevel::Write);
        assert_eq!(Action::AddPermission.access_level(), AccessLevel::PermissionsManagement);
    }
}
