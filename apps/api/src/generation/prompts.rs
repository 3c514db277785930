// All prompt constants for the Generation Proxy. The templates are static
// assets; substitution happens in the operation modules before sending.

/// Weekly meal plan template. Replace `{user_profile_summary}` before sending.
/// The response-format section is enforced upstream via the JSON response
/// directive; the structure here is what callers are documented to receive.
pub const WEEKLY_PLAN_PROMPT_TEMPLATE: &str = r#"ACT AS A SENIOR EXECUTIVE CHEF.

Task: Design a bespoke 7-day meal plan for the following client.

Client Profile & Constraints:
{user_profile_summary}

STRICT CHEF'S REQUIREMENTS (Must pass "Chef's Audit"):
1. **Safety Check**: Verify every ingredient against the client's allergies and dislikes. Zero tolerance for errors.
2. **Meal Selection**: Pay close attention to "Which meals do you need planned?". ONLY generate the requested meals.
3. **Skill Matching**: If the client is a beginner, use fail-proof techniques.
4. **Efficiency**: The Sunday prep must genuinely cut 50% of weeknight cooking time.
5. **Instructions**: You MUST provide concise but complete step-by-step instructions for every meal generated.
6. **Nutrition Logic**: Prioritize whole foods.

Output Format: JSON only with this structure:
{
    "weekTitle": "string",
    "theme": "string",
    "dailyPlans": [{"day": "string", "meals": [{"type": "string", "name": "string", "timeEstimate": "string", "description": "string", "techniqueFocus": "string", "ingredients": ["string"], "instructions": ["string"]}]}],
    "groceryList": [{"item": "string", "category": "string", "note": "string"}],
    "sundayPrep": [{"task": "string", "time": "string", "why": "string"}],
    "sustainabilityTip": "string"
}
"#;

/// Persona preamble prepended to every chat prompt.
pub const CHEF_PERSONA: &str = "You are Chef AI, a helpful culinary mentor. ";

/// Recipe card template. Replace `{chat_context}` before sending.
pub const RECIPE_CARD_PROMPT_TEMPLATE: &str = r#"Based on this conversation, generate a final JSON recipe card:
{chat_context}

Output Format: JSON only with this structure:
{
    "recipe": {"name": "string", "timing": "string", "ingredients": ["string"], "instructions": ["string"], "chefTip": "string", "whyItWorks": "string"}
}
"#;
