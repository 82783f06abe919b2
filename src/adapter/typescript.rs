//! TypeScript adapter
//!
//! Business-logic patterns rather than widgets: the snippet declares a class
//! extending the imported pattern base and shows how it is instantiated.
//! Table entries are template parameters; a caller config may override any
//! of them (e.g. `entityName`).

use super::framework::{layered_config, LanguageAdapter};
use crate::dataset::instance_name;
use crate::language::Language;
use crate::props::Props;
use crate::props;
use crate::statement::IncludeTarget;

#[derive(Debug, Default)]
pub struct TypeScriptAdapter;

impl TypeScriptAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Template parameters for one component variation. Pattern families
    /// fall back to their default parameters for unlisted variations.
    pub fn variation_config(component: &str, variation: &str) -> Props {
        match (component, variation) {
            ("Repository", "standard") => props! {
                "entityName" => "Product",
                "interfaceName" => "ProductEntity",
                "additionalFields" => "name: string;\n  price: number;\n  category: string;",
            },
            ("Repository", _) => props! {
                "entityName" => "Entity",
                "interfaceName" => "EntityEntity",
                "additionalFields" => "name: string;\n  status: string;",
            },
            ("UseCase", "crud") => props! {
                "name" => "CrudUseCase",
                "entityName" => "Product",
                "requestFields" => "action: \"create\" | \"update\" | \"delete\"; data?: any",
                "responseFields" => "success: boolean; data?: any; message?: string",
                "repositoryName" => "productRepository",
            },
            ("UseCase", _) => props! {
                "name" => "UseCase",
                "entityName" => "Entity",
                "requestFields" => "data: any",
                "responseFields" => "success: boolean; data?: any",
                "repositoryName" => "repository",
            },
            ("EventBus", "typed") => props! {
                "additionalEvents" => "'order.created': { id: string; total: number };\n  'order.updated': { id: string; changes: Partial<Order> };",
            },
            _ => Props::new(),
        }
    }
}

impl LanguageAdapter for TypeScriptAdapter {
    fn language(&self) -> Language {
        Language::TypeScript
    }

    fn generate_import(&self, target: &IncludeTarget<'_>) -> String {
        format!(
            "import {{ {} }} from '{}';",
            target.component.name, target.variation.import_path
        )
    }

    fn generate_code(&self, target: &IncludeTarget<'_>) -> String {
        let table = Self::variation_config(&target.component.name, &target.variation.name);
        let params = Params {
            config: layered_config(table, target),
            alias: target.statement.alias.as_deref(),
        };

        match (target.component.name.as_str(), target.variation.name.as_str()) {
            ("Repository", _) => repository(&params),
            ("UseCase", _) => use_case(&params),
            ("EventBus", "typed") => typed_event_bus(&params),
            ("EventBus", _) => event_bus(&params),
            (component, _) => generic(component, &params),
        }
    }
}

struct Params<'a> {
    config: Props,
    alias: Option<&'a str>,
}

impl Params<'_> {
    fn get<'b>(&'b self, key: &str, default: &'b str) -> &'b str {
        self.config.get(key).and_then(|v| v.as_str()).unwrap_or(default)
    }

    fn class_name(&self, default: String) -> String {
        self.alias.map(str::to_string).unwrap_or(default)
    }
}

/// `  {line}\n`, or nothing when the line is empty
fn optional_line(line: &str) -> String {
    if line.is_empty() {
        String::new()
    } else {
        format!("  {}\n", line)
    }
}

fn repository(params: &Params<'_>) -> String {
    let entity = params.get("entityName", "Entity");
    let default_interface = format!("{}Entity", entity);
    let interface = params.get("interfaceName", &default_interface);
    let class = params.class_name(format!("{}Repository", entity));
    let instance = instance_name(&class);
    let resource = format!("/{}s", entity.to_lowercase());
    let fields = optional_line(params.get("additionalFields", ""));

    format!(
        "// Entity interface
interface {interface} {{
  id: string;
  createdAt: Date;
  updatedAt: Date;
{fields}}}

// Repository implementation
class {class} extends Repository<{interface}> {{
  constructor(private apiClient: ApiClient) {{
    super();
  }}

  async findAll(params?: QueryParams): Promise<PaginatedResponse<{interface}>> {{
    const response = await this.apiClient.get('{resource}', params);
    return this.mapResponse(response);
  }}

  async findById(id: string): Promise<{interface}> {{
    const response = await this.apiClient.get(`{resource}/${{id}}`);
    return response.data;
  }}

  async create(data: CreateDTO<{interface}>): Promise<{interface}> {{
    const response = await this.apiClient.post('{resource}', data);
    return response.data;
  }}

  async update(id: string, data: UpdateDTO<{interface}>): Promise<{interface}> {{
    const response = await this.apiClient.put(`{resource}/${{id}}`, data);
    return response.data;
  }}

  async delete(id: string): Promise<void> {{
    await this.apiClient.delete(`{resource}/${{id}}`);
  }}
}}

// Usage
const {instance} = new {class}(apiClient);"
    )
}

fn use_case(params: &Params<'_>) -> String {
    let name = params.get("name", "UseCase");
    let entity = params.get("entityName", "Entity");
    let repository = params.get("repositoryName", "repository");
    let request_fields = params.get("requestFields", "data: any");
    let response_fields = params.get("responseFields", "success: boolean; data?: any");
    let event = name.to_lowercase();
    let class = params.class_name(if name == "UseCase" {
        format!("{}UseCase", entity)
    } else {
        format!("{}{}", entity, name)
    });
    let instance = instance_name(&class);

    format!(
        "// Use case interface
interface {name}Request {{
  {request_fields}
}}

interface {name}Response {{
  {response_fields}
}}

// Use case implementation
class {class} extends UseCase<{name}Request, {name}Response> {{
  constructor(
    private {repository}: Repository<{entity}>,
    private eventBus: EventBus
  ) {{
    super();
  }}

  async execute(request: {name}Request): Promise<{name}Response> {{
    try {{
      this.validateRequest(request);
      const result = await this.processRequest(request);
      this.eventBus.emit('{event}.completed', result);

      return {{
        success: true,
        data: result
      }};
    }} catch (error) {{
      this.eventBus.emit('{event}.failed', error);
      throw error;
    }}
  }}

  private validateRequest(request: {name}Request): void {{
    if (!request.data) {{
      throw new Error('Data is required');
    }}
  }}

  private async processRequest(request: {name}Request): Promise<any> {{
    return request.data;
  }}
}}

// Usage
const {instance} = new {class}({repository}, eventBus);"
    )
}

fn typed_event_bus(params: &Params<'_>) -> String {
    let class = params.class_name("AppEventBus".to_string());
    let instance = instance_name(&class);
    let events = optional_line(params.get("additionalEvents", ""));

    format!(
        "// Typed event definitions
interface AppEvents {{
  'user.created': {{ id: string; name: string; email: string }};
  'user.updated': {{ id: string; changes: Partial<User> }};
  'user.deleted': {{ id: string }};
{events}}}

// Typed event bus implementation
class {class} extends TypedEventBus<AppEvents> {{
  emit<K extends keyof AppEvents>(event: K, data: AppEvents[K]): void {{
    super.emit(event, data);
  }}

  on<K extends keyof AppEvents>(
    event: K,
    listener: (data: AppEvents[K]) => void
  ): () => void {{
    return super.on(event, listener);
  }}
}}

// Usage
const {instance} = new {class}();

{instance}.on('user.created', (user) => {{
  console.log(`User created: ${{user.name}}`);
}});

{instance}.emit('user.created', {{
  id: '123',
  name: 'John Doe',
  email: 'john@example.com'
}});"
    )
}

fn event_bus(params: &Params<'_>) -> String {
    let class = params.class_name("AppEventBus".to_string());
    let instance = instance_name(&class);

    format!(
        "// Standard event bus implementation
class {class} extends EventBus {{
  emitUserCreated(user: {{ id: string; name: string; email: string }}): void {{
    this.emit('user.created', user);
  }}

  onUserCreated(callback: (user: any) => void): () => void {{
    return this.on('user.created', callback);
  }}
}}

// Usage
const {instance} = new {class}();

{instance}.onUserCreated((user) => {{
  console.log(`User created: ${{user.name}}`);
}});

{instance}.emitUserCreated({{
  id: '123',
  name: 'John Doe',
  email: 'john@example.com'
}});"
    )
}

fn generic(component: &str, params: &Params<'_>) -> String {
    let class = params.class_name(format!("App{}", component));
    let instance = instance_name(&class);
    let constructor_params = params.get("constructorParams", "");
    let usage_params = params.get("usageParams", "");
    let methods = optional_line(params.get("customMethods", ""));

    format!(
        "// {component} implementation
class {class} extends {component} {{
  constructor({constructor_params}) {{
    super();
  }}
{methods}}}

// Usage
const {instance} = new {class}({usage_params});"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ComponentCategory, ComponentDefinition, ComponentVariation};
    use crate::statement::IncludeStatement;

    fn render(component: &str, variation: &str, statement: IncludeStatement) -> (String, String) {
        let definition = ComponentDefinition::new(
            component,
            "",
            ComponentCategory::Display,
            vec![ComponentVariation::new(variation, "", "@cin7/typescript-sdk")],
        );
        let target = IncludeTarget {
            statement: &statement,
            component: &definition,
            variation: &definition.variations[0],
        };
        let adapter = TypeScriptAdapter::new();
        (adapter.generate_import(&target), adapter.generate_code(&target))
    }

    #[test]
    fn test_named_import() {
        let (import, _) = render("Repository", "default", IncludeStatement::new(Language::TypeScript, "Repository", "default"));
        assert_eq!(import, "import { Repository } from '@cin7/typescript-sdk';");
    }

    #[test]
    fn test_repository_templates() {
        let (_, code) = render("Repository", "standard", IncludeStatement::new(Language::TypeScript, "Repository", "standard"));
        assert!(code.contains("interface ProductEntity {"));
        assert!(code.contains("  category: string;\n}"));
        assert!(code.contains("class ProductRepository extends Repository<ProductEntity> {"));
        assert!(code.contains("this.apiClient.get(`/products/${id}`)"));
        assert!(code.ends_with("const productRepository = new ProductRepository(apiClient);"));

        // unlisted variations use the family defaults
        let (_, code) = render("Repository", "cached", IncludeStatement::new(Language::TypeScript, "Repository", "cached"));
        assert!(code.contains("class EntityRepository extends Repository<EntityEntity> {"));
    }

    #[test]
    fn test_caller_config_parameterizes_template() {
        let statement = IncludeStatement::new(Language::TypeScript, "Repository", "default")
            .with_prop("entityName", "Order")
            .with_prop("interfaceName", "Order");
        let (_, code) = render("Repository", "default", statement);
        assert!(code.contains("class OrderRepository extends Repository<Order> {"));
        assert!(code.contains("this.apiClient.post('/orders', data)"));
    }

    #[test]
    fn test_use_case() {
        let (_, code) = render("UseCase", "crud", IncludeStatement::new(Language::TypeScript, "UseCase", "crud"));
        assert!(code.contains("class ProductCrudUseCase extends UseCase<CrudUseCaseRequest, CrudUseCaseResponse> {"));
        assert!(code.contains("private productRepository: Repository<Product>,"));
        assert!(code.contains("this.eventBus.emit('crudusecase.completed', result);"));
        assert!(code.ends_with("new ProductCrudUseCase(productRepository, eventBus);"));
    }

    #[test]
    fn test_event_bus_variants() {
        let (_, typed) = render("EventBus", "typed", IncludeStatement::new(Language::TypeScript, "EventBus", "typed"));
        assert!(typed.contains("class AppEventBus extends TypedEventBus<AppEvents> {"));
        assert!(typed.contains("  'order.created': { id: string; total: number };\n"));

        let (_, standard) = render("EventBus", "default", IncludeStatement::new(Language::TypeScript, "EventBus", "default"));
        assert!(standard.starts_with("// Standard event bus implementation\nclass AppEventBus extends EventBus {"));
        assert!(standard.contains("appEventBus.onUserCreated((user) => {"));
    }

    #[test]
    fn test_generic_with_alias() {
        let statement = IncludeStatement::new(Language::TypeScript, "Button", "default")
            .with_alias("SubmitButton")
            .with_prop("usageParams", "'Submit'");
        let (_, code) = render("Button", "default", statement);
        assert_eq!(
            code,
            "// Button implementation\nclass SubmitButton extends Button {\n  constructor() {\n    super();\n  }\n}\n\n// Usage\nconst submitButton = new SubmitButton('Submit');"
        );
    }
}
