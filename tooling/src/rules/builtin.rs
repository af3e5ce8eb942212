//! Rule sets shipped with the tooling.
//!
//! One set per page or component that still carried hardcoded French copy
//! when the UI moved onto the translation catalogue. Every set uses the
//! default `lang` variable.

use super::{FileRuleSet, TranslationRule};

pub(super) fn rule_sets() -> Vec<FileRuleSet> {
    vec![
        dashboard(),
        connectors(),
        compliance(),
        users(),
        automation(),
        integrations(),
        languages(),
        machine_learning(),
        bloodhound(),
        pingcastle(),
        rosetta(),
        details(),
        profile(),
        remediation(),
        login(),
        register(),
    ]
}

fn dashboard() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"Score de Sécurité AD\"", "dashboard.adSecurityScore"),
        TranslationRule::call("\"/100\"", "dashboard.outOf"),
        TranslationRule::call("\"depuis le mois dernier\"", "dashboard.since"),
        TranslationRule::call("\"+12%\"", "dashboard.increase"),
        TranslationRule::call("\"Chemins Critiques (Tier 0)\"", "dashboard.criticalPaths"),
        TranslationRule::call(
            "\"Identifiés par BloodHound\"",
            "dashboard.identifiedByBloodhound",
        ),
        TranslationRule::call("\"Contrôles NIST 2.0 Actifs\"", "dashboard.nistControls"),
        TranslationRule::prefixed_call("\"64%\"", "64", "dashboard.percent"),
        TranslationRule::call("\"Plan d'Action\"", "dashboard.remediationPlan"),
        TranslationRule::call("\"Plan Validé - En cours\"", "dashboard.planValidated"),
        TranslationRule::call(
            "\"En attente de validation\"",
            "dashboard.awaitingValidation",
        ),
        TranslationRule::call(
            "\"Évolution de la Posture & Risques\"",
            "dashboard.evolution",
        ),
        TranslationRule::call("\"6 derniers mois\"", "dashboard.lastMonths"),
        TranslationRule::call("\"Cette année\"", "dashboard.thisYear"),
        TranslationRule::prefixed_call(
            "name=\"Score de Conformité\"",
            "name=",
            "dashboard.compliance",
        ),
        TranslationRule::prefixed_call(
            "name=\"Risques Détectés\"",
            "name=",
            "dashboard.detectedRisks",
        ),
        TranslationRule::call("\"Top Failles Identifiées\"", "dashboard.topFlaws"),
        TranslationRule::call("\"Voir tout\"", "dashboard.viewAll"),
        TranslationRule::call("{\"Source\"}", "dashboard.source"),
        TranslationRule::call("{\"Faille\"}", "dashboard.flaw"),
        TranslationRule::call("{\"Asset\"}", "dashboard.asset"),
        TranslationRule::call("{\"Priorité IA\"}", "dashboard.priorityAI"),
        TranslationRule::call("{\"Action\"}", "dashboard.action"),
        TranslationRule::call("\"Analyser\"", "dashboard.analyze"),
        TranslationRule::call("\"Couverture NIST CSF 2.0\"", "dashboard.nistCoverage"),
        TranslationRule::call("\"IA Insight\"", "dashboard.aiInsight"),
        TranslationRule::call("\"Voir l'analyse prédictive\"", "dashboard.viewAnalysis"),
    ];
    FileRuleSet::new("src/pages/Dashboard.jsx", rules)
}

fn connectors() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"Connecteurs\"", "connectors.title"),
        TranslationRule::call(
            "\"Gérez les connexions aux sources de données\"",
            "connectors.description",
        ),
        TranslationRule::call("\"BloodHound Enterprise\"", "connectors.bloodhound"),
        TranslationRule::call(
            "\"Configuration de l'accès API pour la récupération des graphes d'attaque.\"",
            "connectors.bloodhoundDescription",
        ),
        TranslationRule::call("\"URL de l'API / Instance\"", "connectors.apiUrl"),
        TranslationRule::call("\"Token API\"", "connectors.apiToken"),
        TranslationRule::call("\"PingCastle (Analyse Statique)\"", "connectors.pingcastle"),
        TranslationRule::call(
            "\"Emplacement des rapports d'audit XML et des fichiers de règles.\"",
            "connectors.pingcastleDescription",
        ),
        TranslationRule::call("\"Dossier des Rapports XML\"", "connectors.xmlReportFolder"),
        TranslationRule::call(
            "\"Fichier Catalog des Règles\"",
            "connectors.rulesCatalogFile",
        ),
        TranslationRule::call(
            "\"Fréquences de Synchronisation\"",
            "connectors.frequencies",
        ),
        TranslationRule::call(
            "\"Intervalles de polling et de rafraîchissement des données.\"",
            "connectors.frequenciesDescription",
        ),
        TranslationRule::call("\"Polling BloodHound (heures)\"", "connectors.bhPolling"),
        TranslationRule::call(
            "\"Fréquence de récupération des données BloodHound\"",
            "connectors.bhPollingDescription",
        ),
        TranslationRule::call("\"Polling PingCastle (jours)\"", "connectors.pcPolling"),
        TranslationRule::call(
            "\"Fréquence de lecture des rapports PingCastle\"",
            "connectors.pcPollingDescription",
        ),
        TranslationRule::call(
            "\"Refresh Application (secondes)\"",
            "connectors.appRefresh",
        ),
        TranslationRule::call(
            "\"Intervalle de mise à jour de l'interface\"",
            "connectors.appRefreshDescription",
        ),
    ];
    FileRuleSet::new("src/pages/Connectors.jsx", rules)
}

fn compliance() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"Radar de Conformité\"", "compliance.title"),
        TranslationRule::call(
            "\"Analysez votre posture de conformité selon différents modèles\"",
            "compliance.description",
        ),
        TranslationRule::call(
            "\"Sélectionnez votre modèle de conformité\"",
            "compliance.selectFramework",
        ),
        TranslationRule::call(
            "\"Choisissez le framework qui correspond à vos besoins\"",
            "compliance.chooseFramework",
        ),
        TranslationRule::call("\"NIST CSF 2.0\"", "compliance.nist"),
        TranslationRule::call("\"CIS Controls v8\"", "compliance.cis"),
        TranslationRule::call("\"ISO/IEC 27001\"", "compliance.iso"),
        TranslationRule::call("\"Modèle Personnalisé\"", "compliance.custom"),
        TranslationRule::call("\"Couverture\"", "compliance.coverage"),
        TranslationRule::call("\"Score Global\"", "compliance.overallScore"),
        TranslationRule::verbatim("\"/ 100\"", "/ 100"),
        TranslationRule::call("\"Détails par catégorie\"", "compliance.categoryDetails"),
        TranslationRule::call("\"Score Actuel\"", "compliance.currentScore"),
        TranslationRule::call("\"Objectif\"", "compliance.target"),
    ];
    FileRuleSet::new("src/pages/Compliance.jsx", rules)
}

fn users() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"Gestion des Utilisateurs\"", "users.title"),
        TranslationRule::call(
            "\"Utilisateurs locaux, rôles et authentification (SSO optionnel).\"",
            "users.description",
        ),
        TranslationRule::call("\"Créer un utilisateur\"", "users.create"),
        TranslationRule::call("\"Rafraîchir\"", "users.refresh"),
        TranslationRule::call("\"Utilisateurs\"", "users.username"),
        TranslationRule::call(
            "\"Aucun utilisateur trouvé. Lancez un rafraîchissement ou créez un compte.\"",
            "users.noUsers",
        ),
        TranslationRule::call("\"Nom\"", "users.name"),
        TranslationRule::call("\"Rôles\"", "users.roles"),
        TranslationRule::call("\"Auth\"", "users.auth"),
        TranslationRule::call("\"Local\"", "users.local"),
        TranslationRule::call("\"SSO\"", "users.sso"),
        TranslationRule::call("\"Suppr\"", "users.delete"),
        TranslationRule::call("\"Rôles de l'Application\"", "users.applicationRoles"),
        TranslationRule::call(
            "\"Définissez les rôles disponibles pour les utilisateurs\"",
            "users.defineRoles",
        ),
        TranslationRule::call("\"Sauvegarder Rôles\"", "users.saveRoles"),
        TranslationRule::call(
            "\"Nom du nouveau rôle (ex: security-admin)\"",
            "users.newRoleName",
        ),
        TranslationRule::call("\"Ajouter\"", "users.addRole"),
        TranslationRule::call(
            "\"Les rôles définis ici seront disponibles lors de la création ou modification des utilisateurs.\"",
            "users.rolesInfo",
        ),
    ];
    FileRuleSet::new("src/pages/Users.jsx", rules)
}

fn automation() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"Automatisation\"", "automation.title"),
        TranslationRule::call(
            "\"Connexion aux outils ITSM pour la création automatique de tickets.\"",
            "automation.description",
        ),
        TranslationRule::call("\"Systèmes de Billetterie\"", "automation.ticketingSystems"),
        TranslationRule::call(
            "\"Connexions aux API de ces systèmes pour la création automatique de tickets.\"",
            "automation.ticketingDescription",
        ),
        TranslationRule::call("\"JIRA Software\"", "automation.jira"),
        TranslationRule::call("\"Instance URL\"", "automation.instanceUrl"),
        TranslationRule::call("\"Projet Key (ex: SEC, IT)\"", "automation.projectKey"),
        TranslationRule::call("\"Service User\"", "automation.serviceUser"),
        TranslationRule::call("\"API Token\"", "automation.apiToken"),
        TranslationRule::call("\"ServiceNow\"", "automation.servicenow"),
        TranslationRule::call("\"User ID\"", "automation.userId"),
        TranslationRule::call("\"Password / Token\"", "automation.password"),
        TranslationRule::call("\"Remédiations\"", "automation.remediation"),
        TranslationRule::call(
            "\"Configuration des conditions d'automatisation du workflow\"",
            "automation.remediationDescription",
        ),
        TranslationRule::call(
            "\"Configuration Workflow Remédiation\"",
            "automation.workflowConfig",
        ),
        TranslationRule::call(
            "\"Auto-Approbation si Risque <\"",
            "automation.autoApproval",
        ),
        TranslationRule::call("\"Assigné par défaut\"", "automation.assignedBy"),
        TranslationRule::call(
            "\"Approbation CAB requise pour Tier 0\"",
            "automation.cabApproval",
        ),
        TranslationRule::call("\"Configuration SSO\"", "automation.sso"),
        TranslationRule::call(
            "\"Paramètres d'authentification unique (Single Sign-On)\"",
            "automation.ssoDescription",
        ),
        TranslationRule::call("\"Sauvegarder SSO\"", "automation.saveSso"),
        TranslationRule::call("\"Provider SSO\"", "automation.ssoProvider"),
        TranslationRule::call("\"Azure AD / Entra ID\"", "automation.azureAd"),
        TranslationRule::call("\"Okta\"", "automation.okta"),
        TranslationRule::call("\"Google Workspace\"", "automation.google"),
        TranslationRule::call("\"SAML 2.0\"", "automation.saml"),
        TranslationRule::call("\"Client ID / Application ID\"", "automation.clientId"),
        TranslationRule::call("\"Tenant ID / Organization ID\"", "automation.tenantId"),
        TranslationRule::call("\"Redirect URI\"", "automation.redirectUri"),
        TranslationRule::call(
            "\"Une fois configuré, utilisez le bouton \"Tester SSO\" pour vérifier la connexion.\"",
            "automation.ssoInstruction",
        ),
        TranslationRule::call("\"Tester SSO\"", "automation.testSso"),
    ];
    FileRuleSet::new("src/pages/Automation.jsx", rules)
}

fn integrations() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"Intégrations\"", "integrations.title"),
        TranslationRule::call(
            "\"Configurez les intégrations externes\"",
            "integrations.description",
        ),
        TranslationRule::call("\"Intégrations disponibles\"", "integrations.available"),
        TranslationRule::call(
            "\"Les configurations des intégrations se trouvent dans la page \"Systèmes de Billetterie & Remédiation\".\"",
            "integrations.ticketingInfo",
        ),
    ];
    FileRuleSet::new("src/pages/Integrations.jsx", rules)
}

fn languages() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"Langues\"", "languages.title"),
        TranslationRule::call(
            "\"Langue par défaut et gestion des langues disponibles.\"",
            "languages.description",
        ),
        TranslationRule::call("\"Langues disponibles:\"", "languages.available"),
        TranslationRule::call("\"Langue par défaut\"", "languages.default"),
        TranslationRule::call("\"Ajouter une langue\"", "languages.addLanguage"),
        TranslationRule::call("\"Ajouter\"", "languages.add"),
        TranslationRule::call("\"Gestion des Traductions\"", "languages.management"),
        TranslationRule::call(
            "\"Éditez les traductions de l'application\"",
            "languages.editTranslations",
        ),
        TranslationRule::call("\"Sauvegarder\"", "languages.save"),
        TranslationRule::call("\"Annuler\"", "languages.cancel"),
        TranslationRule::call("\"Éditer\"", "languages.edit"),
        TranslationRule::call("\"Sélectionnez une langue\"", "languages.selectLanguage"),
        TranslationRule::call("\"Clé\"", "languages.key"),
        TranslationRule::call("\"Traduction\"", "languages.translation"),
        TranslationRule::call(
            "\"Aucune traduction disponible pour cette langue\"",
            "languages.noTranslations",
        ),
        TranslationRule::call(
            "\"Seuls les administrateurs peuvent gérer les traductions. Connectez-vous avec un compte administrateur pour accéder à cette section.\"",
            "languages.adminOnly",
        ),
    ];
    FileRuleSet::new("src/pages/Languages.jsx", rules)
}

fn machine_learning() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"Centre d'Apprentissage Machine\"", "ml.title"),
        TranslationRule::call(
            "\"Calibration du modèle de risque basé sur les données historiques.\"",
            "ml.description",
        ),
        TranslationRule::call("\"Entraînement en cours...\"", "ml.training"),
        TranslationRule::call("\"Modèle Optimisé Actif\"", "ml.optimized"),
        TranslationRule::call(
            "\"Lancer l'Optimisation du Modèle\"",
            "ml.launchOptimization",
        ),
        TranslationRule::call(
            "\"Pondération des Caractéristiques\"",
            "ml.featureWeighting",
        ),
        TranslationRule::call("\"Précision du Modèle\"", "ml.modelAccuracy"),
    ];
    FileRuleSet::new("src/pages/ML.jsx", rules)
}

fn bloodhound() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"Vue BloodHound\"", "bloodhound.title"),
        TranslationRule::call(
            "\"Contenu BloodHound à intégrer (à venir).\"",
            "bloodhound.content",
        ),
    ];
    FileRuleSet::new("src/pages/Bloodhound.jsx", rules)
}

fn pingcastle() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"Vue PingCastle\"", "pingcastle.title"),
        TranslationRule::call(
            "\"Contenu PingCastle à intégrer (à venir).\"",
            "pingcastle.content",
        ),
    ];
    FileRuleSet::new("src/pages/Pingcastle.jsx", rules)
}

fn rosetta() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"Pierre de Rosette\"", "rosetta.title"),
        TranslationRule::call("\"Contenu à intégrer (à venir).\"", "rosetta.content"),
    ];
    FileRuleSet::new("src/pages/Rosetta.jsx", rules)
}

fn details() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call(
            "\"Retour au Command Center\"",
            "details.backToCommandCenter",
        ),
        TranslationRule::call(
            "\"Sélectionner Vulnérabilité:\"",
            "details.selectVulnerability",
        ),
        TranslationRule::call("\"Critical Risk\"", "details.criticalRisk"),
        TranslationRule::call("\"ID:\"", "details.id"),
        TranslationRule::call("\"Générer un Ticket Jira\"", "details.generateJiraTicket"),
        TranslationRule::call("\"Plan non validé\"", "details.planNotValidated"),
        TranslationRule::call(
            "\"Validez le plan de remédiation d'abord\"",
            "details.validateFirst",
        ),
        TranslationRule::call(
            "\"Visualisation du Chemin d'Attaque (BloodHound Data)\"",
            "details.attackPathVisualization",
        ),
        TranslationRule::call(
            "\"Analyse de Conformité (Mapping Complet)\"",
            "details.complianceAnalysis",
        ),
        TranslationRule::call("\"NIST CSF\"", "details.nistCsf"),
        TranslationRule::call("\"Version 2.0 (2024)\"", "details.version20"),
        TranslationRule::call("\"Version 1.1\"", "details.version11"),
        TranslationRule::call("\"CIS Controls\"", "details.cisControls"),
        TranslationRule::call("\"Version v8\"", "details.versionV8"),
        TranslationRule::call("\"Version v7\"", "details.versionV7"),
        TranslationRule::call("\"Modèle Custom (Interne)\"", "details.customModel"),
        TranslationRule::call("\"Gain de Remédiation\"", "details.remediationGain"),
        TranslationRule::call(
            "\"Impact estimé sur le score global\"",
            "details.estimatedImpact",
        ),
        TranslationRule::call(
            "\"De réduction de surface d'attaque\"",
            "details.reductionAttackSurface",
        ),
        TranslationRule::call("\"Criticité:\"", "details.criticality"),
        TranslationRule::call("\"Coût:\"", "details.cost"),
        TranslationRule::call(
            "\"Actions Techniques Recommandées\"",
            "details.recommendedActions",
        ),
        TranslationRule::call(
            "\"1 - Rotation du mot de passe\"",
            "details.passwordRotation",
        ),
        TranslationRule::call(
            "\"Changer immédiatement le mot de passe du compte de service impacté (min 25 chars).\"",
            "details.passwordRotationDescription",
        ),
        TranslationRule::call("\"2 - AES Encryption\"", "details.aesEncryption"),
        TranslationRule::call(
            "\"Activer le support AES pour Kerberos afin de rendre le cracking plus difficile.\"",
            "details.aesEncryptionDescription",
        ),
    ];
    FileRuleSet::new("src/pages/Details.jsx", rules)
}

fn profile() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"Mon Profil\"", "profile.title"),
        TranslationRule::call("\"Email / ID\"", "profile.email"),
        TranslationRule::call("\"Prénom\"", "profile.firstName"),
        TranslationRule::call("\"Nom\"", "profile.lastName"),
        TranslationRule::call("\"Nom complet (auto-généré)\"", "profile.fullName"),
        TranslationRule::call("\"Rôle métier (optionnel)\"", "profile.businessRole"),
        TranslationRule::call("\"-- Aucun --\"", "profile.none"),
        TranslationRule::call("\"Roles techniques\"", "profile.technicalRoles"),
        TranslationRule::call("\"Avatar\"", "profile.avatar"),
        TranslationRule::call("\"Aperçu de la photo\"", "profile.preview"),
        TranslationRule::call("\"Sauvegarder position\"", "profile.savePosition"),
        TranslationRule::call("\"Centrer\"", "profile.center"),
        TranslationRule::call("\"Supprimer l'image\"", "profile.removeImage"),
        TranslationRule::call("\"Changer le mot de passe\"", "profile.changePassword"),
        TranslationRule::call(
            "\"Nouveau mot de passe (optionnel)\"",
            "profile.newPassword",
        ),
        TranslationRule::call(
            "\"Laisser vide pour garder le mot de passe actuel\"",
            "profile.keepCurrent",
        ),
        TranslationRule::call("\"Confirmer le mot de passe\"", "profile.confirmPassword"),
        TranslationRule::call(
            "\"Confirmer le nouveau mot de passe\"",
            "profile.confirmNew",
        ),
        TranslationRule::call("\"Enregistrement...\"", "profile.saving"),
        TranslationRule::call("\"Enregistrer les modifications\"", "profile.saveChanges"),
        TranslationRule::call("\"Annuler\"", "profile.cancel"),
    ];
    FileRuleSet::new("src/pages/Profile.jsx", rules)
}

fn remediation() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"Plan Global de Remédiation\"", "remediation.title"),
        TranslationRule::call(
            "\"Validez la stratégie globale avant d'autoriser la création de tickets unitaires.\"",
            "remediation.description",
        ),
        TranslationRule::call("\"Liste\"", "remediation.list"),
        TranslationRule::call("\"Matrice\"", "remediation.matrix"),
        TranslationRule::call("\"Plan Validé\"", "remediation.planValidated"),
        TranslationRule::call("\"Valider le Plan\"", "remediation.validatePlan"),
        TranslationRule::call(
            "\"Matrice Complexité vs Criticité (Quick Wins)\"",
            "remediation.complexityMatrix",
        ),
        TranslationRule::call("\"Effort / Complexité\"", "remediation.effort"),
        TranslationRule::call("\"Impact / Criticité\"", "remediation.impact"),
        TranslationRule::call("\"Actions de remédiation\"", "remediation.actions"),
        TranslationRule::call(
            "\"Zone en haut à gauche : Priorité absolue (Fort Impact, Faible Effort)\"",
            "remediation.quickWinsZone",
        ),
        TranslationRule::call(
            "\"Détail des Actions & Synchronisation JIRA\"",
            "remediation.detailActions",
        ),
        TranslationRule::call("\"ID\"", "remediation.id"),
        TranslationRule::call("\"Action Requise\"", "remediation.requiredAction"),
        TranslationRule::call("\"Priorité\"", "remediation.priority"),
        TranslationRule::call("\"Dépendances\"", "remediation.dependencies"),
        TranslationRule::call("\"Responsable (JIRA Suggest)\"", "remediation.responsible"),
        TranslationRule::call("\"Statut (JIRA Sync)\"", "remediation.status"),
        TranslationRule::call("\"Requiert #\"", "remediation.requires"),
        TranslationRule::call("\"Suggéré par JIRA...\"", "remediation.suggestedByJira"),
        TranslationRule::call("\"To Do\"", "remediation.todo"),
        TranslationRule::call("\"In Progress\"", "remediation.inProgress"),
        TranslationRule::call("\"Done\"", "remediation.done"),
        TranslationRule::call("\"Validation\"", "remediation.validation"),
    ];
    FileRuleSet::new("src/pages/Remediation.jsx", rules)
}

fn login() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"— Plateforme de Défense AD\"", "login.title"),
        TranslationRule::call("\"Connexion locale\"", "login.local"),
        TranslationRule::call("\"Email ou UPN (ex: user@domain.com)\"", "login.email"),
        TranslationRule::call("\"Password\"", "login.password"),
        TranslationRule::call("\"Se connecter\"", "login.signIn"),
        TranslationRule::call("\"Vous n'avez pas de compte local ?\"", "login.noAccount"),
        TranslationRule::call("\"Créer un utilisateur\"", "login.createUser"),
        TranslationRule::call(
            "\"Serveur d'authentification indisponible — l'application utilisera la configuration locale (fallback).\"",
            "login.authUnavailable",
        ),
        TranslationRule::call("\"Single Sign-On (SSO)\"", "login.sso"),
        TranslationRule::call(
            "\"Utilisez votre fournisseur d'identité d'entreprise (Azure AD, Okta, Keycloak...). Ceci est un stub local.\"",
            "login.ssoDescription",
        ),
        TranslationRule::call("\"Se connecter via SSO\"", "login.ssoSignIn"),
        TranslationRule::call(
            "\"Si le serveur SSO n'est pas disponible, créez un compte local via la page de création.\"",
            "login.ssoNote",
        ),
    ];
    FileRuleSet::new("src/components/Login.jsx", rules)
}

fn register() -> FileRuleSet {
    let rules = vec![
        TranslationRule::call("\"Create local user\"", "register.title"),
        TranslationRule::call("\"Email or UPN\"", "register.email"),
        TranslationRule::call("\"First name\"", "register.firstName"),
        TranslationRule::call("\"Last name\"", "register.lastName"),
        TranslationRule::call("\"Password\"", "register.password"),
        TranslationRule::call("\"Business role (optional)\"", "register.businessRole"),
        TranslationRule::call("\"-- none --\"", "register.none"),
        TranslationRule::call("\"Create\"", "register.create"),
        TranslationRule::call("\"Cancel\"", "register.cancel"),
    ];
    FileRuleSet::new("src/components/Register.jsx", rules)
}
