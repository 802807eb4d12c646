use crate::catalog::Service;

actions! {
    service = "lex";
    /// Grants permission to create a new version based on the $LATEST version of the specified bot
    CreateBotVersion: Write,
    /// Grants permission to create a new version based on the $LATEST version of the specified intent
    CreateIntentVersion: Write,
    /// Grants permission to create a new version based on the $LATEST version of the specified slot type
    CreateSlotTypeVersion: Write,
    /// Grants permission to delete all versions of a bot
    DeleteBot: Write,
    /// Grants permission to delete an alias for a specific bot
    DeleteBotAlias: Write,
    /// Grants permission to delete the association between a Amazon Lex bot alias and a messaging platform
    DeleteBotChannelAssociation: Write,
    /// Grants permission to delete a specific version of a bot
    DeleteBotVersion: Write,
    /// Grants permission to delete all versions of an intent
    DeleteIntent: Write,
    /// Grants permission to delete a specific version of an intent
    DeleteIntentVersion: Write,
    /// Grants permission to remove session information for a specified bot, alias, and user ID
    DeleteSession: Write,
    /// Grants permission to delete all versions of a slot type
    DeleteSlotType: Write,
    /// Grants permission to delete a specific version of a slot type
    DeleteSlotTypeVersion: Write,
    /// Grants permission to delete the information Amazon Lex maintains for utterances on a specific bot and userId
    DeleteUtterances: Write,
    /// Grants permission to return information for a specific bot. In addition to the bot name, the bot version or alias is required
    GetBot: Read,
    /// Grants permission to return information about a Amazon Lex bot alias
    GetBotAlias: Read,
    /// Grants permission to return a list of aliases for a given Amazon Lex bot
    GetBotAliases: List,
    /// Grants permission to return information about the association between a Amazon Lex bot and a messaging platform
    GetBotChannelAssociation: Read,
    /// Grants permission to return a list of all of the channels associated with a single bot
    GetBotChannelAssociations: List,
    /// Grants permission to get information about all of the versions of a bot
    GetBotVersions: List,
    /// Grants permission to return information for the $LATEST version of all bots, subject to filters provided by the client
    GetBots: List,
    /// Grants permission to return information about a built-in intent
    GetBuiltinIntent: Read,
    /// Grants permission to get a list of built-in intents that meet the specified criteria
    GetBuiltinIntents: Read,
    /// Grants permission to get a list of built-in slot types that meet the specified criteria
    GetBuiltinSlotTypes: Read,
    /// Grants permission to export Amazon Lex Resource in a requested format
    GetExport: Read,
    /// Grants permission to get information about an import job started with StartImport
    GetImport: Read,
    /// Grants permission to return information for a specific intent. In addition to the intent name, you must also specify the intent version
    GetIntent: Read,
    /// Grants permission to get information about all of the versions of an intent
    GetIntentVersions: List,
    /// Grants permission to return information for the $LATEST version of all intents, subject to filters provided by the client
    GetIntents: List,
    /// Grants permission to get details about an ongoing or complete migration from an Amazon Lex V1 bot to an Amazon Lex V2 bot
    GetMigration: Read,
    /// Grants permission to get a list of migrations between Amazon Lex V1 and Amazon Lex V2
    GetMigrations: List,
    /// Grants permission to return session information for a specified bot, alias, and user ID
    GetSession: Read,
    /// Grants permission to return information about a specific version of a slot type
    GetSlotType: Read,
    /// Grants permission to get information about all versions of a slot type
    GetSlotTypeVersions: List,
    /// Grants permission to return information about slot types, subject to filters provided by the client
    GetSlotTypes: List,
    /// Grants permission to view usage data (utterances) for a specific bot
    GetUtterancesView: List,
    /// Grants permission to list tags for a Lex resource
    ListTagsForResource: Read,
    /// Grants permission to send user input (text or speech) to Amazon Lex
    PostContent: Write,
    /// Grants permission to send user input (text-only) to Amazon Lex
    PostText: Write,
    /// Grants permission to create or update the $LATEST version of a Amazon Lex conversational bot
    PutBot: Write,
    /// Grants permission to create or update an alias for the specific bot
    PutBotAlias: Write,
    /// Grants permission to create or update the $LATEST version of an intent
    PutIntent: Write,
    /// Grants permission to create a new session or modify an existing session with an Amazon Lex bot
    PutSession: Write,
    /// Grants permission to create or update the $LATEST version of a slot type
    PutSlotType: Write,
    /// Grants permission to start a job to import a resource to Amazon Lex
    StartImport: Write,
    /// Grants permission to migrate a bot from Amazon Lex V1 to Amazon Lex V2
    StartMigration: Write,
    /// Grants permission to add or overwrite tags of a Lex resource
    TagResource: Tagging,
    /// Grants permission to remove tags from a Lex resource
    UntagResource: Tagging,
}

pub mod resource {
    resources! {
        service = "lex";
        bot => Bot { partition, region, account, bot_name } =
            "arn:{partition}:lex:{region}:{account}:bot:{bot_name}";
        bot_version => BotVersion { partition, region, account, bot_name, bot_version } =
            "arn:{partition}:lex:{region}:{account}:bot:{bot_name}:{bot_version}";
        bot_alias => BotAlias { partition, region, account, bot_name, bot_alias } =
            "arn:{partition}:lex:{region}:{account}:bot:{bot_name}:{bot_alias}";
        channel => Channel { partition, region, account, bot_name, bot_alias, channel_name } =
            "arn:{partition}:lex:{region}:{account}:bot-channel:{bot_name}:{bot_alias}:{channel_name}";
        intent_version => IntentVersion { partition, region, account, intent_name, intent_version } =
            "arn:{partition}:lex:{region}:{account}:intent:{intent_name}:{intent_version}";
        slottype_version => SlotTypeVersion { partition, region, account, slot_name, slot_version } =
            "arn:{partition}:lex:{region}:{account}:slottype:{slot_name}:{slot_version}";
    }
}

pub const SERVICE: Service = Service {
    prefix: PREFIX,
    name: "Amazon Lex",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonlex.html",
    actions: Action::ENTRIES,
    resource_types: resource::RESOURCE_TYPES,
};

#[cfg(test)]
mod test {
    use super::resource;

    #[test]
    fn bot_version_uses_colons() {
        let arn = resource::bot_version()
            .partition("aws")
            .region("us-east-1")
            .account("123456789012")
            .bot_name("OrderFlowers")
            .bot_version("3")
            .build();
        assert_eq!(arn, "arn:aws:lex:us-east-1:123456789012:bot:OrderFlowers:3");
    }

    #[test]
    fn channel_defaults() {
        assert_eq!(resource::channel().build(), "arn:*:lex:*:*:bot-channel:*:*:*");
    }
}
