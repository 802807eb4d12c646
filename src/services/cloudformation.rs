use crate::catalog::Service;

actions! {
    service = "cloudformation";
    /// Grants permission to activate trusted access between StackSets and Organizations
    ActivateOrganizationsAccess: Write,
    /// Grants permission to activate a public third-party extension
    ActivateType: Write,
    /// Grants permission to return configuration data for the specified CloudFormation extensions
    BatchDescribeTypeConfigurations: Read,
    /// Grants permission to cancel an update on the specified stack
    CancelUpdateStack: Write,
    /// Grants permission to continue rolling back a stack that is in the UPDATE_ROLLBACK_FAILED state
    ContinueUpdateRollback: Write,
    /// Grants permission to create a list of changes for a stack
    CreateChangeSet: Write,
    /// Grants permission to create a template from existing resources
    CreateGeneratedTemplate: Write,
    /// Grants permission to create a stack as specified in the template
    CreateStack: Write,
    /// Grants permission to create stack instances for the specified accounts, within the specified regions
    CreateStackInstances: Write,
    /// Grants permission to create a stackset as specified in the template
    CreateStackSet: Write,
    /// Grants permission to upload templates to Amazon S3 buckets
    CreateUploadBucket: Write,
    /// Grants permission to deactivate trusted access between StackSets and Organizations
    DeactivateOrganizationsAccess: Write,
    /// Grants permission to deactivate a public extension that was previously activated in this account and region
    DeactivateType: Write,
    /// Grants permission to delete the specified change set
    DeleteChangeSet: Write,
    /// Grants permission to delete a generated template
    DeleteGeneratedTemplate: Write,
    /// Grants permission to delete a specified stack
    DeleteStack: Write,
    /// Grants permission to delete stack instances for the specified accounts, in the specified regions
    DeleteStackInstances: Write,
    /// Grants permission to delete a specified stackset
    DeleteStackSet: Write,
    /// Grants permission to deregister an existing CloudFormation type or type version
    DeregisterType: Write,
    /// Grants permission to retrieve your account's AWS CloudFormation limits
    DescribeAccountLimits: Read,
    /// Grants permission to return the description for the specified change set
    DescribeChangeSet: Read,
    /// Grants permission to return the Hook invocation information for the specified change set
    DescribeChangeSetHooks: Read,
    /// Grants permission to describe a generated template
    DescribeGeneratedTemplate: Read,
    /// Grants permission to retrieve information about the account's OrganizationAccess status
    DescribeOrganizationsAccess: Read,
    /// Grants permission to return information about a CloudFormation extension publisher
    DescribePublisher: Read,
    /// Grants permission to describe a resource scan
    DescribeResourceScan: Read,
    /// Grants permission to return information about a stack drift detection operation
    DescribeStackDriftDetectionStatus: Read,
    /// Grants permission to return all stack related events for a specified stack
    DescribeStackEvents: Read,
    /// Grants permission to return the stack instance that's associated with the specified stack set, AWS account, and region
    DescribeStackInstance: Read,
    /// Grants permission to return a description of the specified resource in the specified stack
    DescribeStackResource: Read,
    /// Grants permission to return drift information for the resources that have been checked for drift in the specified stack
    DescribeStackResourceDrifts: Read,
    /// Grants permission to return AWS resource descriptions for running and deleted stacks
    DescribeStackResources: Read,
    /// Grants permission to return the description of the specified stack set
    DescribeStackSet: Read,
    /// Grants permission to return the description of the specified stack set operation
    DescribeStackSetOperation: Read,
    /// Grants permission to return the description for the specified stack, and to all stacks when used in a policy
    DescribeStacks: List,
    /// Grants permission to return detailed information about a type that has been registered
    DescribeType: Read,
    /// Grants permission to return information about a type's registration
    DescribeTypeRegistration: Read,
    /// Grants permission to detect whether a stack's actual configuration differs from its expected template configuration
    DetectStackDrift: Read,
    /// Grants permission to return information about whether a resource's actual configuration differs from its expected configuration
    DetectStackResourceDrift: Read,
    /// Grants permission to enable users to detect drift on a stack set and the stack instances that belong to that stack set
    DetectStackSetDrift: Read,
    /// Grants permission to return the estimated monthly cost of a template
    EstimateTemplateCost: Read,
    /// Grants permission to update a stack using the input information that was provided when the specified change set was created
    ExecuteChangeSet: Write,
    /// Grants permission to retrieve a generated template
    GetGeneratedTemplate: Read,
    /// Grants permission to return the stack policy for a specified stack
    GetStackPolicy: Read,
    /// Grants permission to return the template body for a specified stack
    GetTemplate: Read,
    /// Grants permission to return information about a new or existing template
    GetTemplateSummary: Read,
    /// Grants permission to enable users to import existing stacks to a new or existing stackset
    ImportStacksToStackSet: Write,
    /// Grants permission to return the ID and status of each active change set for a stack
    ListChangeSets: List,
    /// Grants permission to list all exported output values in the account and region in which you call this action
    ListExports: List,
    /// Grants permission to list generated templates
    ListGeneratedTemplates: List,
    /// Grants permission to list all stacks that are importing an exported output value
    ListImports: List,
    /// Grants permission to list the related resources of the scanned resources in a resource scan
    ListResourceScanRelatedResources: List,
    /// Grants permission to list the resources from a resource scan
    ListResourceScanResources: List,
    /// Grants permission to list resource scans
    ListResourceScans: List,
    /// Grants permission to return drift information for resources in a stack instance
    ListStackInstanceResourceDrifts: List,
    /// Grants permission to return summary information about stack instances that are associated with the specified stack set
    ListStackInstances: List,
    /// Grants permission to return descriptions of all resources of the specified stack
    ListStackResources: List,
    /// Grants permission to return summary information about deployment targets for a stack set
    ListStackSetAutoDeploymentTargets: List,
    /// Grants permission to return summary information about the results of a stack set operation
    ListStackSetOperationResults: List,
    /// Grants permission to return summary information about operations performed on a stack set
    ListStackSetOperations: List,
    /// Grants permission to return summary information about stack sets that are associated with the user
    ListStackSets: List,
    /// Grants permission to return the summary information for stacks whose status matches the specified StackStatusFilter
    ListStacks: List,
    /// Grants permission to list CloudFormation type registration attempts
    ListTypeRegistrations: List,
    /// Grants permission to list versions of a particular CloudFormation type
    ListTypeVersions: List,
    /// Grants permission to list available CloudFormation types
    ListTypes: List,
    /// Grants permission to publish the specified extension to the CloudFormation registry as a public extension in this region
    PublishType: Write,
    /// Grants permission to record the handler progress
    RecordHandlerProgress: Write,
    /// Grants permission to register account as a publisher of public extensions in the CloudFormation registry
    RegisterPublisher: Write,
    /// Grants permission to register a new CloudFormation type
    RegisterType: Write,
    /// Grants permission to roll back the stack to the last stable state
    RollbackStack: Write,
    /// Grants permission to set a stack policy for a specified stack
    SetStackPolicy: PermissionsManagement,
    /// Grants permission to set the configuration data for a CloudFormation extension, in a given account and region
    SetTypeConfiguration: Write,
    /// Grants permission to set which version of a CloudFormation type applies to CloudFormation operations
    SetTypeDefaultVersion: Write,
    /// Grants permission to send a signal to the specified resource with a success or failure status
    SignalResource: Write,
    /// Grants permission to start a resource scan
    StartResourceScan: Write,
    /// Grants permission to stop an in-progress operation on a stack set and its associated stack instances
    StopStackSetOperation: Write,
    /// Grants permission to tag CloudFormation resources
    TagResource: Tagging,
    /// Grants permission to test a registered extension to make sure it meets all necessary requirements for being published in the CloudFormation registry
    TestType: Write,
    /// Grants permission to untag CloudFormation resources
    UntagResource: Tagging,
    /// Grants permission to update a generated template
    UpdateGeneratedTemplate: Write,
    /// Grants permission to update a stack as specified in the template
    UpdateStack: Write,
    /// Grants permission to update the parameter values for stack instances for the specified accounts, within the specified regions
    UpdateStackInstances: Write,
    /// Grants permission to update a stackset as specified in the template
    UpdateStackSet: Write,
    /// Grants permission to update termination protection for the specified stack
    UpdateTerminationProtection: Write,
    /// Grants permission to validate a specified template
    ValidateTemplate: Read,
}

pub mod resource {
    resources! {
        service = "cloudformation";
        changeset => ChangeSet { partition, region, account, change_set_name, id } =
            "arn:{partition}:cloudformation:{region}:{account}:changeSet/{change_set_name}/{id}";
        stack => Stack { partition, region, account, stack_name, id } =
            "arn:{partition}:cloudformation:{region}:{account}:stack/{stack_name}/{id}";
        /// Stack set IDs are joined to the name with `:`, unlike stacks.
        stackset => StackSet { partition, region, account, stack_set_name, id } =
            "arn:{partition}:cloudformation:{region}:{account}:stackset/{stack_set_name}:{id}";
        stackset_target => StackSetTarget { partition, region, account, stack_set_target } =
            "arn:{partition}:cloudformation:{region}:{account}:stackset-target/{stack_set_target}";
        /// A registry extension type, AWS's `type` resource.
        registry_type => RegistryType { partition, region, account, type_name } =
            "arn:{partition}:cloudformation:{region}:{account}:type/resource/{type_name}";
        generatedtemplate => GeneratedTemplate { partition, region, account, id } =
            "arn:{partition}:cloudformation:{region}:{account}:generatedtemplate/{id}";
        resourcescan => ResourceScan { partition, region, account, id } =
            "arn:{partition}:cloudformation:{region}:{account}:resourceScan/{id}";
    }
}

pub const SERVICE: Service = Service {
    prefix: PREFIX,
    name: "AWS CloudFormation",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awscloudformation.html",
    actions: Action::ENTRIES,
    resource_types: resource::RESOURCE_TYPES,
};

#[cfg(test)]
mod test {
    use super::{resource, Action};
    use crate::iam::AccessLevel;

    #[test]
    fn stack_with_name_and_id() {
        let arn = resource::stack().stack_name("prod").id("abc-123").build();
        assert_eq!(arn, "arn:*:cloudformation:*:*:stack/prod/abc-123");
    }

    #[test]
    fn stackset_uses_colon_before_id() {
        let arn = resource::stackset()
            .partition("aws")
            .region("us-west-2")
            .account("123456789012")
            .stack_set_name("baseline")
            .id("0d3b-11ee")
            .build();
        assert_eq!(arn, "arn:aws:cloudformation:us-west-2:123456789012:stackset/baseline:0d3b-11ee");
    }

    #[test]
    fn registry_type_resource() {
        let arn = resource::registry_type().type_name("AWS-S3-Bucket").build();
        assert_eq!(arn, "arn:*:cloudformation:*:*:type/resource/AWS-S3-Bucket");
    }

    #[test]
    fn stack_policy_is_permissions_management() {
        assert_eq!(Action::SetStackPolicy.access_level(), AccessLevel::PermissionsManagement);
        assert_eq!(Action::DescribeStacks.access_level(), AccessLevel::List);
    }
}
