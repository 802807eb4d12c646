use crate::catalog::Service;

actions! {
    service = "codecommit";
    /// Grants permission to associate an approval rule template with a repository
    AssociateApprovalRuleTemplateWithRepository: Write,
    /// Grants permission to associate an approval rule template with multiple repositories in a single operation
    BatchAssociateApprovalRuleTemplateWithRepositories: Write,
    /// Grants permission to get information about multiple merge conflicts when attempting to merge two commits using either the three-way merge or the squash merge option
    BatchDescribeMergeConflicts: Read,
    /// Grants permission to remove the association between an approval rule template and multiple repositories in a single operation
    BatchDisassociateApprovalRuleTemplateFromRepositories: Write,
    /// Grants permission to return information about one or more commits in a repository
    BatchGetCommits: Read,
    /// Grants permission to return information about one or more pull requests in a repository
    BatchGetPullRequests: Read,
    /// Grants permission to return information about multiple repositories
    BatchGetRepositories: Read,
    /// Grants permission to cancel the uploading of an archive to a pipeline in AWS CodePipeline
    CancelUploadArchive: Read,
    /// Grants permission to create an approval rule template that will automatically create approval rules in pull requests that match the conditions defined in the template
    CreateApprovalRuleTemplate: Write,
    /// Grants permission to create a branch in a repository from an existing commit
    CreateBranch: Write,
    /// Grants permission to add, copy, move or update single or multiple files in a branch in a repository
    CreateCommit: Write,
    /// Grants permission to create a pull request in the specified repository
    CreatePullRequest: Write,
    /// Grants permission to create an approval rule specific to an individual pull request
    CreatePullRequestApprovalRule: Write,
    /// Grants permission to create an empty repository
    CreateRepository: Write,
    /// Grants permission to create an unreferenced commit that contains the result of merging two commits using either the three-way or the squash merge option
    CreateUnreferencedMergeCommit: Write,
    /// Grants permission to delete an approval rule template
    DeleteApprovalRuleTemplate: Write,
    /// Grants permission to delete a branch in a repository
    DeleteBranch: Write,
    /// Grants permission to delete the content of a comment made on a change, file, or commit in a repository
    DeleteCommentContent: Write,
    /// Grants permission to delete a specified file from a specified branch
    DeleteFile: Write,
    /// Grants permission to delete approval rule created for a pull request if the rule was not created by an approval rule template
    DeletePullRequestApprovalRule: Write,
    /// Grants permission to delete a repository
    DeleteRepository: Write,
    /// Grants permission to get information about specific merge conflicts when attempting to merge two commits using either the three-way or the squash merge option
    DescribeMergeConflicts: Read,
    /// Grants permission to return information about one or more pull request events
    DescribePullRequestEvents: Read,
    /// Grants permission to remove the association between an approval rule template and a repository
    DisassociateApprovalRuleTemplateFromRepository: Write,
    /// Grants permission to evaluate whether a pull request is mergable based on its current approval state and approval rule requirements
    EvaluatePullRequestApprovalRules: Read,
    /// Grants permission to return information about an approval rule template
    GetApprovalRuleTemplate: Read,
    /// Grants permission to download an archive of a repository from the CodeCommit console
    GetArchive: Read,
    /// Grants permission to view the encoded content of an individual file in a repository from the CodeCommit console
    GetBlob: Read,
    /// Grants permission to get details about a branch in a repository
    GetBranch: Read,
    /// Grants permission to get the content of a comment made on a change, file, or commit in a repository
    GetComment: Read,
    /// Grants permission to get the reactions on a comment
    GetCommentReactions: Read,
    /// Grants permission to get information about comments made on the comparison between two commits
    GetCommentsForComparedCommit: Read,
    /// Grants permission to get comments made on a pull request
    GetCommentsForPullRequest: Read,
    /// Grants permission to return information about a commit, including commit message and committer information
    GetCommit: Read,
    /// Grants permission to get information about the history of commits in a repository
    GetCommitHistory: Read,
    /// Grants permission to get information about the difference between commits in the context of a potential merge
    GetCommitsFromMergeBase: Read,
    /// Grants permission to view information about the differences between valid commit specifiers such as a branch, tag, HEAD, commit ID, or other fully qualified reference
    GetDifferences: Read,
    /// Grants permission to return the base-64 encoded contents of a specified file and its metadata
    GetFile: Read,
    /// Grants permission to return the contents of a specified folder in a repository
    GetFolder: Read,
    /// Grants permission to get information about a merge commit created by one of the merge options for pull requests that creates merge commits
    GetMergeCommit: Read,
    /// Grants permission to get information about merge conflicts between the before and after commit IDs for a pull request in a repository
    GetMergeConflicts: Read,
    /// Grants permission to get information about merge options for pull requests that can be used to merge two commits
    GetMergeOptions: Read,
    /// Grants permission to resolve blobs, trees, and commits to their identifier
    GetObjectIdentifier: Read,
    /// Grants permission to get information about a pull request in a specified repository
    GetPullRequest: Read,
    /// Grants permission to retrieve the current approvals on an inputted pull request
    GetPullRequestApprovalStates: Read,
    /// Grants permission to retrieve the current override state of a given pull request
    GetPullRequestOverrideState: Read,
    /// Grants permission to get details about references in a repository, such as branches and tags
    GetReferences: Read,
    /// Grants permission to get information about a repository
    GetRepository: Read,
    /// Grants permission to get information about triggers configured for a repository
    GetRepositoryTriggers: Read,
    /// Grants permission to view the contents of a specified tree in a repository from the CodeCommit console
    GetTree: Read,
    /// Grants permission to get status information about an archive upload to a pipeline in AWS CodePipeline
    GetUploadArchiveStatus: Read,
    /// Grants permission to pull information from a CodeCommit repository to a local repo
    GitPull: Read,
    /// Grants permission to push information from a local repo to a CodeCommit repository
    GitPush: Write,
    /// Grants permission to list all approval rule templates in an AWS Region for the AWS account
    ListApprovalRuleTemplates: List,
    /// Grants permission to list approval rule templates that are associated with a repository
    ListAssociatedApprovalRuleTemplatesForRepository: List,
    /// Grants permission to list branches for a repository
    ListBranches: List,
    /// Grants permission to list commits and changes to a specified file
    ListFileCommitHistory: List,
    /// Grants permission to list pull requests for a specified repository
    ListPullRequests: List,
    /// Grants permission to list information about AWS CodeCommit repositories in the current Region for your AWS account
    ListRepositories: List,
    /// Grants permission to list repositories that are associated with an approval rule template
    ListRepositoriesForApprovalRuleTemplate: List,
    /// Grants permission to list the resource attached to a CodeCommit resource ARN
    ListTagsForResource: Read,
    /// Grants permission to merge two commits into the specified destination branch using the fast-forward merge option
    MergeBranchesByFastForward: Write,
    /// Grants permission to merge two commits into the specified destination branch using the squash merge option
    MergeBranchesBySquash: Write,
    /// Grants permission to merge two commits into the specified destination branch using the three-way merge option
    MergeBranchesByThreeWay: Write,
    /// Grants permission to close a pull request and attempt to merge it into the specified destination branch for that pull request at the specified commit using the fast-forward merge option
    MergePullRequestByFastForward: Write,
    /// Grants permission to close a pull request and attempt to merge it into the specified destination branch for that pull request at the specified commit using the squash merge option
    MergePullRequestBySquash: Write,
    /// Grants permission to close a pull request and attempt to merge it into the specified destination branch for that pull request at the specified commit using the three-way merge option
    MergePullRequestByThreeWay: Write,
    /// Grants permission to override all approval rules for a pull request, including approval rules created by a template
    OverridePullRequestApprovalRules: Write,
    /// Grants permission to post a comment on the comparison between two commits
    PostCommentForComparedCommit: Write,
    /// Grants permission to post a comment on a pull request
    PostCommentForPullRequest: Write,
    /// Grants permission to post a comment in reply to a comment on a comparison between commits or a pull request
    PostCommentReply: Write,
    /// Grants permission to post a reaction on a comment
    PutCommentReaction: Write,
    /// Grants permission to add or update a file in a branch in a repository
    PutFile: Write,
    /// Grants permission to create, update, or delete triggers for a repository
    PutRepositoryTriggers: Write,
    /// Grants permission to attach resource tags to a CodeCommit resource ARN
    TagResource: Tagging,
    /// Grants permission to test the functionality of repository triggers by sending information to the trigger target
    TestRepositoryTriggers: Write,
    /// Grants permission to disassociate resource tags from a CodeCommit resource ARN
    UntagResource: Tagging,
    /// Grants permission to update the content of approval rule templates
    UpdateApprovalRuleTemplateContent: Write,
    /// Grants permission to update the description of approval rule templates
    UpdateApprovalRuleTemplateDescription: Write,
    /// Grants permission to update the name of approval rule templates
    UpdateApprovalRuleTemplateName: Write,
    /// Grants permission to update the contents of a comment if the identity matches the identity used to create the comment
    UpdateComment: Write,
    /// Grants permission to change the default branch in a repository
    UpdateDefaultBranch: Write,
    /// Grants permission to update the content for approval rules created for a specific pull requests
    UpdatePullRequestApprovalRuleContent: Write,
    /// Grants permission to update the approval state for pull requests
    UpdatePullRequestApprovalState: Write,
    /// Grants permission to update the description of a pull request
    UpdatePullRequestDescription: Write,
    /// Grants permission to update the status of a pull request
    UpdatePullRequestStatus: Write,
    /// Grants permission to update the title of a pull request
    UpdatePullRequestTitle: Write,
    /// Grants permission to change the description of a repository
    UpdateRepositoryDescription: Write,
    /// Grants permission to change the AWS KMS key used to encrypt and decrypt a repository
    UpdateRepositoryEncryptionKey: Write,
    /// Grants permission to change the name of a repository
    UpdateRepositoryName: Write,
    /// Grants permission to the service role for AWS CodePipeline to upload repository changes into a pipeline
    UploadArchive: Write,
}

pub mod resource {
    resources! {
        service = "codecommit";
        /// The repository name is the whole resource path, with no type segment.
        repository => Repository { partition, region, account, repository_name } =
            "arn:{partition}:codecommit:{region}:{account}:{repository_name}";
    }
}

pub const SERVICE: Service = Service {
    prefix: PREFIX,
    name: "AWS CodeCommit",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awscodecommit.html",
    actions: Action::ENTRIES,
    resource_types: resource::RESOURCE_TYPES,
};

#[cfg(test)]
mod test {
    use super::{resource, Action};

    #[test]
    fn repository_has_bare_name() {
        assert_eq!(resource::repository().build(), "arn:*:codecommit:*:*:*");
        let arn = resource::repository().account("123456789012").repository_name("infra").build();
        assert_eq!(arn, "arn:*:codecommit:*:123456789012:infra");
    }

    #[test]
    fn git_actions() {
        assert_eq!(Action::GitPull.as_str(), "codecommit:GitPull");
        assert_eq!(Action::GitPush.as_str(), "codecommit:GitPush");
    }
}
