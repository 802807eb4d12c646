use crate::catalog::Service;

actions! {
    service = "dynamodb";
    /// Grants permission to return the attributes of one or more items from one or more tables
    BatchGetItem: Read,
    /// Grants permission to put or delete multiple items in one or more tables
    BatchWriteItem: Write,
    /// Grants permission to check the existence of a set of attributes for an item with the given primary key
    ConditionCheckItem: Read,
    /// Grants permission to create a backup for an existing table
    CreateBackup: Write,
    /// Grants permission to create a global table from an existing table
    CreateGlobalTable: Write,
    /// Grants permission to create a table
    CreateTable: Write,
    /// Grants permission to add a new replica table
    CreateTableReplica: Write,
    /// Grants permission to delete an existing backup of a table
    DeleteBackup: Write,
    /// Grants permission to delete a single item in a table by primary key
    DeleteItem: Write,
    /// Grants permission to delete a resource-based policy from a table or stream
    DeleteResourcePolicy: Write,
    /// Grants permission to delete a table and all of its items
    DeleteTable: Write,
    /// Grants permission to delete a replica table and all of its items
    DeleteTableReplica: Write,
    /// Grants permission to describe an existing backup of a table
    DescribeBackup: Read,
    /// Grants permission to check the status of the backup restore settings on the specified table
    DescribeContinuousBackups: Read,
    /// Grants permission to describe the contributor insights status and related details for a given table or global secondary index
    DescribeContributorInsights: Read,
    /// Grants permission to return the regional endpoint information
    DescribeEndpoints: Read,
    /// Grants permission to describe an existing export of a table
    DescribeExport: Read,
    /// Grants permission to return information about the specified global table
    DescribeGlobalTable: Read,
    /// Grants permission to return settings information about the specified global table
    DescribeGlobalTableSettings: Read,
    /// Grants permission to describe an existing import
    DescribeImport: Read,
    /// Grants permission to describe the status of Kinesis streaming and related details for a given table
    DescribeKinesisStreamingDestination: Read,
    /// Grants permission to return the current provisioned-capacity limits for your AWS account in a region, both for the region as a whole and for any one DynamoDB table that you create there
    DescribeLimits: Read,
    /// Grants permission to describe one or more of the Reserved Capacity purchased
    DescribeReservedCapacity: Read,
    /// Grants permission to describe Reserved Capacity offerings that are available for purchase
    DescribeReservedCapacityOfferings: Read,
    /// Grants permission to return information about a stream, including the current status of the stream, its Amazon Resource Name (ARN), and the composition of its shards
    DescribeStream: Read,
    /// Grants permission to return information about the table
    DescribeTable: Read,
    /// Grants permission to describe the auto scaling settings across all replicas of the global table
    DescribeTableReplicaAutoScaling: Read,
    /// Grants permission to give a description of the Time to Live (TTL) status on the specified table
    DescribeTimeToLive: Read,
    /// Grants permission to stop replication from the DynamoDB table to the Kinesis data stream
    DisableKinesisStreamingDestination: Write,
    /// Grants permission to start table data replication to the specified Kinesis data stream at a timestamp chosen during the enable workflow
    EnableKinesisStreamingDestination: Write,
    /// Grants permission to initiate an export of a DynamoDB table to S3
    ExportTableToPointInTime: Write,
    /// Grants permission to return a set of attributes for the item with the given primary key
    GetItem: Read,
    /// Grants permission to retrieve the stream records from a given shard
    GetRecords: Read,
    /// Grants permission to view a resource-based policy for a table or stream
    GetResourcePolicy: Read,
    /// Grants permission to return a shard iterator
    GetShardIterator: Read,
    /// Grants permission to initiate an import from S3 to a DynamoDB table
    ImportTable: Write,
    /// Grants permission to list backups associated with the account and endpoint
    ListBackups: List,
    /// Grants permission to list the ContributorInsightsSummary for all tables and global secondary indexes associated with the current account and endpoint
    ListContributorInsights: List,
    /// Grants permission to list exports associated with the account and endpoint
    ListExports: List,
    /// Grants permission to list all global tables that have a replica in the specified region
    ListGlobalTables: List,
    /// Grants permission to list imports associated with the account and endpoint
    ListImports: List,
    /// Grants permission to return an array of stream ARNs associated with the current account and endpoint
    ListStreams: Read,
    /// Grants permission to return an array of table names associated with the current account and endpoint
    ListTables: List,
    /// Grants permission to list all tags on an Amazon DynamoDB resource
    ListTagsOfResource: Read,
    /// Grants permission to delete a single item in a table by primary key using a PartiQL statement
    PartiQLDelete: Write,
    /// Grants permission to create a new item, if an item with same primary key does not exist in the table, using a PartiQL statement
    PartiQLInsert: Write,
    /// Grants permission to read a set of attributes for items from a table or index using a PartiQL statement
    PartiQLSelect: Read,
    /// Grants permission to edit an existing item's attributes using a PartiQL statement
    PartiQLUpdate: Write,
    /// Grants permission to purchase Reserved Capacity for use with your account
    PurchaseReservedCapacityOfferings: Write,
    /// Grants permission to create a new item, or replace an old item with a new item
    PutItem: Write,
    /// Grants permission to attach a resource-based policy to a table or stream
    PutResourcePolicy: Write,
    /// Grants permission to use the primary key of a table or a secondary index to directly access items from that table or index
    Query: Read,
    /// Grants permission to create a new table from recovery point on AWS Backup
    RestoreTableFromAwsBackup: Write,
    /// Grants permission to create a new table from an existing backup
    RestoreTableFromBackup: Write,
    /// Grants permission to restore a table to a point in time
    RestoreTableToPointInTime: Write,
    /// Grants permission to return one or more items and item attributes by accessing every item in a table or a secondary index
    Scan: Read,
    /// Grants permission to initiate a backup using AWS Backup service
    StartAwsBackupJob: Write,
    /// Grants permission to associate a set of tags with an Amazon DynamoDB resource
    TagResource: Tagging,
    /// Grants permission to remove the association of tags from an Amazon DynamoDB resource
    UntagResource: Tagging,
    /// Grants permission to enable or disable continuous backups
    UpdateContinuousBackups: Write,
    /// Grants permission to update the status for contributor insights for a specific table or global secondary index
    UpdateContributorInsights: Write,
    /// Grants permission to add or remove replicas in the specified global table
    UpdateGlobalTable: Write,
    /// Grants permission to update settings of the specified global table
    UpdateGlobalTableSettings: Write,
    /// Grants permission to update the version of the specified global table
    UpdateGlobalTableVersion: Write,
    /// Grants permission to edit an existing item's attributes, or adds a new item to the table if it does not already exist
    UpdateItem: Write,
    /// Grants permission to update the Kinesis streaming destination settings of a table
    UpdateKinesisStreamingDestination: Write,
    /// Grants permission to modify the provisioned throughput settings, global secondary indexes, or DynamoDB Streams settings for a given table
    UpdateTable: Write,
    /// Grants permission to update auto scaling settings on your replica table
    UpdateTableReplicaAutoScaling: Write,
    /// Grants permission to enable or disable TTL for the specified table
    UpdateTimeToLive: Write,
}

pub mod resource {
    resources! {
        service = "dynamodb";
        index => Index { partition, region, account, table_name, index_name } =
            "arn:{partition}:dynamodb:{region}:{account}:table/{table_name}/index/{index_name}";
        stream => Stream { partition, region, account, table_name, stream_label } =
            "arn:{partition}:dynamodb:{region}:{account}:table/{table_name}/stream/{stream_label}";
        table => Table { partition, region, account, table_name } =
            "arn:{partition}:dynamodb:{region}:{account}:table/{table_name}";
        backup => Backup { partition, region, account, table_name, backup_name } =
            "arn:{partition}:dynamodb:{region}:{account}:table/{table_name}/backup/{backup_name}";
        export => Export { partition, region, account, table_name, export_name } =
            "arn:{partition}:dynamodb:{region}:{account}:table/{table_name}/export/{export_name}";
        /// Global tables are not regional; their ARN leaves the region empty.
        global_table => GlobalTable { partition, account, global_table_name } =
            "arn:{partition}:dynamodb::{account}:global-table/{global_table_name}";
        import => Import { partition, region, account, table_name, import_name } =
            "arn:{partition}:dynamodb:{region}:{account}:table/{table_name}/import/{import_name}";
    }
}

pub const SERVICE: Service = Service {
    prefix: PREFIX,
    name: "Amazon DynamoDB",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazondynamodb.html",
    actions: Action::ENTRIES,
    resource_types: resource::RESOURCE_TYPES,
};

#[cfg(test)]
mod test {
    use super::{resource, Action};
    use crate::iam::AccessLevel;

    #[test]
    fn action_strings() {
        assert_eq!(Action::All.as_str(), "dynamodb:*");
        assert_eq!(Action::PutItem.as_str(), "dynamodb:PutItem");
        assert_eq!(Action::BatchGetItem.to_string(), "dynamodb:BatchGetItem");
        assert_eq!(Action::PartiQLSelect.access_level(), AccessLevel::Read);
        assert_eq!(Action::TagResource.access_level(), AccessLevel::Tagging);
    }

    #[test]
    fn action_from_str() {
        assert_eq!("dynamodb:PutItem".parse::<Action>().unwrap(), Action::PutItem);
        assert_eq!("DynamoDB:putitem".parse::<Action>().unwrap(), Action::PutItem);
        assert_eq!("dynamodb:*".parse::<Action>().unwrap(), Action::All);
        assert!("dynamodb:PutItems".parse::<Action>().is_err());
        assert!("sqs:PutItem".parse::<Action>().is_err());
    }

    #[test]
    fn table_defaults() {
        assert_eq!(resource::table().build(), "arn:*:dynamodb:*:*:table/*");
    }

    #[test]
    fn index_fully_specified() {
        let arn = resource::index()
            .partition("aws")
            .region("us-east-1")
            .account("123456789012")
            .table_name("Orders")
            .index_name("ByDate")
            .build();
        assert_eq!(arn, "arn:aws:dynamodb:us-east-1:123456789012:table/Orders/index/ByDate");
    }

    #[test]
    fn missing_account_is_wildcarded() {
        let arn = resource::stream()
            .partition("aws")
            .region("eu-west-1")
            .table_name("Orders")
            .stream_label("2024-01-01T00:00:00.000")
            .to_string();
        assert_eq!(arn, "arn:aws:dynamodb:eu-west-1:*:table/Orders/stream/2024-01-01T00:00:00.000");
    }

    #[test]
    fn global_table_has_no_region() {
        assert_eq!(resource::global_table().build(), "arn:*:dynamodb::*:global-table/*");
    }
}
