use crate::catalog::Service;

actions! {
    service = "sns";
    /// Grants permission to add a statement to a topic's access control policy, granting access for the specified AWS accounts to the specified actions
    AddPermission: PermissionsManagement,
    /// Grants permission to accept a phone number and indicate whether the phone holder has opted out of receiving SMS messages from your account
    CheckIfPhoneNumberIsOptedOut: Read,
    /// Grants permission to verify an endpoint owner's intent to receive messages by validating the token sent to the endpoint by an earlier Subscribe action
    ConfirmSubscription: Write,
    /// Grants permission to create a platform application object for one of the supported push notification services
    CreatePlatformApplication: Write,
    /// Grants permission to create an endpoint for a device and mobile app on one of the supported push notification services
    CreatePlatformEndpoint: Write,
    /// Grants permission to add a destination phone number and send a one-time password (OTP) to that phone number for an AWS account
    CreateSMSSandboxPhoneNumber: Write,
    /// Grants permission to create a topic to which notifications can be published
    CreateTopic: Write,
    /// Grants permission to delete the endpoint for a device and mobile app from Amazon SNS
    DeleteEndpoint: Write,
    /// Grants permission to delete a platform application object for one of the supported push notification services
    DeletePlatformApplication: Write,
    /// Grants permission to delete an AWS account's verified or pending phone number
    DeleteSMSSandboxPhoneNumber: Write,
    /// Grants permission to delete a topic and all its subscriptions
    DeleteTopic: Write,
    /// Grants permission to retrieve the specified inline DataProtectionPolicy document that is stored in the specified Amazon SNS topic
    GetDataProtectionPolicy: Read,
    /// Grants permission to retrieve the endpoint attributes for a device on one of the supported push notification services
    GetEndpointAttributes: Read,
    /// Grants permission to retrieve the attributes of the platform application object for the supported push notification services
    GetPlatformApplicationAttributes: Read,
    /// Grants permission to return the settings for sending SMS messages from your account
    GetSMSAttributes: Read,
    /// Grants permission to retrieve the sandbox status for the calling account in the target region
    GetSMSSandboxAccountStatus: Read,
    /// Grants permission to return all of the properties of a subscription
    GetSubscriptionAttributes: Read,
    /// Grants permission to return all of the properties of a topic
    GetTopicAttributes: Read,
    /// Grants permission to list the endpoints and endpoint attributes for devices in a supported push notification service
    ListEndpointsByPlatformApplication: List,
    /// Grants permission to list all origination numbers, and their metadata
    ListOriginationNumbers: List,
    /// Grants permission to return a list of phone numbers that are opted out of receiving SMS messages from your account
    ListPhoneNumbersOptedOut: List,
    /// Grants permission to list the platform application objects for the supported push notification services
    ListPlatformApplications: List,
    /// Grants permission to list the calling account's current pending and verified destination phone numbers
    ListSMSSandboxPhoneNumbers: List,
    /// Grants permission to return a list of the requester's subscriptions
    ListSubscriptions: List,
    /// Grants permission to return a list of the subscriptions to a specific topic
    ListSubscriptionsByTopic: List,
    /// Grants permission to list all tags added to the specified Amazon SNS topic
    ListTagsForResource: Read,
    /// Grants permission to return a list of the requester's topics
    ListTopics: List,
    /// Grants permission to opt in a phone number that is currently opted out, which enables you to resume sending SMS messages to the number
    OptInPhoneNumber: Write,
    /// Grants permission to send a message to all of a topic's subscribed endpoints
    Publish: Write,
    /// Grants permission to add or update an inline policy document that is stored in the specified Amazon SNS topic
    PutDataProtectionPolicy: Write,
    /// Grants permission to remove a statement from a topic's access control policy
    RemovePermission: PermissionsManagement,
    /// Grants permission to set the attributes for an endpoint for a device on one of the supported push notification services
    SetEndpointAttributes: Write,
    /// Grants permission to set the attributes of the platform application object for the supported push notification services
    SetPlatformApplicationAttributes: Write,
    /// Grants permission to set the default settings for sending SMS messages and receiving daily SMS usage reports
    SetSMSAttributes: Write,
    /// Grants permission to allow a subscription owner to set an attribute of the subscription to a new value
    SetSubscriptionAttributes: Write,
    /// Grants permission to allow a topic owner to set an attribute of the topic to a new value
    SetTopicAttributes: PermissionsManagement,
    /// Grants permission to prepare to subscribe an endpoint by sending the endpoint a confirmation message
    Subscribe: Write,
    /// Grants permission to add tags to the specified Amazon SNS topic
    TagResource: Tagging,
    /// Grants permission to delete a subscription
    Unsubscribe: Write,
    /// Grants permission to remove tags from the specified Amazon SNS topic
    UntagResource: Tagging,
    /// Grants permission to verify a destination phone number with a one-time password (OTP) for an AWS account
    VerifySMSSandboxPhoneNumber: Write,
}

pub mod resource {
    resources! {
        service = "sns";
        topic => Topic { partition, region, account, topic_name } =
            "arn:{partition}:sns:{region}:{account}:{topic_name}";
    }
}

pub const SERVICE: Service = Service {
    prefix: PREFIX,
    name: "Amazon SNS",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonsns.html",
    actions: Action::ENTRIES,
    resource_types: resource::RESOURCE_TYPES,
};

#[cfg(test)]
mod test {
    use super::{resource, Action};
    use crate::iam::AccessLevel;

    #[test]
    fn topic_segments() {
        let arn = resource::topic()
            .region("us-east-1")
            .account("123456789012")
            .topic_name("alerts")
            .build();
        assert_eq!(arn, "arn:*:sns:us-east-1:123456789012:alerts");
        assert_eq!(resource::topic().topic_name("alerts").build(), "arn:*:sns:*:*:alerts");
    }

    #[test]
    fn publish_is_write() {
        assert_eq!(Action::Publish.as_str(), "sns:Publish");
        assert_eq!(Action::Publish.access_level(), AccessLevel::Write);
        assert_eq!(Action::ListTopics.access_level(), AccessLevel::List);
    }
}
