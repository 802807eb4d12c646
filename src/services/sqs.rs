use crate::catalog::Service;

actions! {
    service = "sqs";
    /// Grants permission to add a permission to a queue for a specific principal
    AddPermission: PermissionsManagement,
    /// Grants permission to cancel an in progress message move task
    CancelMessageMoveTask: Write,
    /// Grants permission to change the visibility timeout of a specified message in a queue to a new value
    ChangeMessageVisibility: Write,
    /// Grants permission to create a new queue, or returns the URL of an existing one
    CreateQueue: Write,
    /// Grants permission to delete the specified message from the specified queue
    DeleteMessage: Write,
    /// Grants permission to delete the queue specified by the queue URL, regardless of whether the queue is empty
    DeleteQueue: Write,
    /// Grants permission to get attributes for the specified queue
    GetQueueAttributes: Read,
    /// Grants permission to return the URL of an existing queue
    GetQueueUrl: Read,
    /// Grants permission to return a list of your queues that have the RedrivePolicy queue attribute configured with a dead letter queue
    ListDeadLetterSourceQueues: Read,
    /// Grants permission to list the most recent message movement tasks (up to 10) under a specific source queue
    ListMessageMoveTasks: Read,
    /// Grants permission to list tags added to an SQS queue
    ListQueueTags: Read,
    /// Grants permission to return a list of your queues
    ListQueues: List,
    /// Grants permission to delete the messages in a queue specified by the queue URL
    PurgeQueue: Write,
    /// Grants permission to retrieve one or more messages, with a maximum limit of 10 messages, from the specified queue
    ReceiveMessage: Read,
    /// Grants permission to revoke any permissions in the queue policy that matches the specified Label parameter
    RemovePermission: PermissionsManagement,
    /// Grants permission to deliver a message to the specified queue
    SendMessage: Write,
    /// Grants permission to set the value of one or more queue attributes
    SetQueueAttributes: Write,
    /// Grants permission to start a task to move messages from a dead-letter queue to its source queue or to a custom destination queue
    StartMessageMoveTask: Write,
    /// Grants permission to add tags to the specified SQS queue
    TagQueue: Tagging,
    /// Grants permission to remove tags from the specified SQS queue
    UntagQueue: Tagging,
}

pub mod resource {
    resources! {
        service = "sqs";
        queue => Queue { partition, region, account, queue_name } =
            "arn:{partition}:sqs:{region}:{account}:{queue_name}";
    }
}

pub const SERVICE: Service = Service {
    prefix: PREFIX,
    name: "Amazon SQS",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonsqs.html",
    actions: Action::ENTRIES,
    resource_types: resource::RESOURCE_TYPES,
};

#[cfg(test)]
mod test {
    use super::{resource, Action};

    #[test]
    fn queue() {
        let arn = resource::queue().region("eu-central-1").queue_name("jobs.fifo").build();
        assert_eq!(arn, "arn:*:sqs:eu-central-1:*:jobs.fifo");
    }

    #[test]
    fn send_message() {
        assert_eq!(Action::SendMessage.as_ref(), "sqs:SendMessage");
    }
}
